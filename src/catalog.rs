//! # Catalog
//!
//! Ready-made component catalogs: a fixed list of 31 parts for a portable
//! device board, and a generator for synthetic parts. Both are plain
//! `Vec<Component>` values that the optimizer only ever borrows.

use crate::component::{Component, ComponentId};
use crate::rng::RandomSource;

/// Category groups used by [`random_components`].
pub const RANDOM_GROUPS: [&str; 6] = [
    "Sensor",
    "Modulo",
    "Regulador",
    "Interface",
    "Memoria",
    "Processador",
];

/// First identifier handed out by [`random_components`].
pub const RANDOM_ID_BASE: ComponentId = 1000;

/// Returns the built-in catalog, with identifiers `1..=31`.
pub fn sample_components() -> Vec<Component> {
    let parts: [(&str, f64, f64, f64); 31] = [
        // Microcontrollers
        ("Microcontrolador_ARM_Cortex_M4", 45.0, 0.85, 8.5),
        ("Microcontrolador_ESP32", 25.0, 0.75, 6.0),
        ("Microcontrolador_Arduino_Nano", 15.0, 0.65, 4.2),
        ("Microcontrolador_STM32", 35.0, 0.80, 7.1),
        // Sensors
        ("Sensor_Acelerometro", 12.0, 0.90, 2.3),
        ("Sensor_Giroscopio", 18.0, 0.88, 3.1),
        ("Sensor_Temperatura", 8.0, 0.95, 1.5),
        ("Sensor_Proximidade", 22.0, 0.82, 4.0),
        ("Sensor_Pressao", 28.0, 0.78, 3.8),
        ("Sensor_Luminosidade", 10.0, 0.92, 2.1),
        // Connectivity
        ("Modulo_WiFi_802.11ac", 32.0, 0.70, 6.5),
        ("Modulo_Bluetooth_5.0", 18.0, 0.85, 3.2),
        ("Modulo_5G", 85.0, 0.60, 12.0),
        ("Modulo_LoRa", 25.0, 0.88, 4.7),
        ("Modulo_NFC", 15.0, 0.90, 2.8),
        // Power
        ("Regulador_3V3_LDO", 5.0, 0.75, 2.0),
        ("Regulador_5V_Switching", 12.0, 0.92, 4.5),
        ("Conversor_DC_DC", 20.0, 0.88, 6.2),
        ("Carregador_Bateria_Li_Ion", 18.0, 0.85, 5.1),
        // Interface
        ("Display_OLED_128x64", 24.0, 0.70, 8.0),
        ("Display_LCD_16x2", 12.0, 0.60, 6.5),
        ("LED_RGB", 3.0, 0.85, 1.2),
        ("Buzzer_Piezo", 4.0, 0.80, 2.5),
        // Memory
        ("Flash_Memory_16MB", 8.0, 0.90, 2.8),
        ("EEPROM_64KB", 3.0, 0.95, 1.5),
        ("RAM_SRAM_256KB", 12.0, 0.88, 3.2),
        // Passives
        ("Crystal_32MHz", 2.0, 0.98, 1.0),
        ("Capacitor_Supercap", 15.0, 0.85, 4.0),
        ("Indutor_Power", 6.0, 0.90, 2.5),
        // Security
        ("Chip_Criptografia", 35.0, 0.80, 5.5),
        ("TPM_Security", 28.0, 0.85, 4.2),
    ];

    parts
        .iter()
        .zip(1..)
        .map(|(&(label, cost, efficiency, size), id)| {
            Component::new(id, label, cost, efficiency, size)
        })
        .collect()
}

/// Generates `count` synthetic parts.
///
/// Part `i` gets identifier `1000 + i` and a label `<Group>_<100 + i>`.
/// Cost falls in `[5, 95)`, efficiency in `[0.5, 1.0)` and size in `[1, 16)`.
pub fn random_components<R: RandomSource>(count: usize, rng: &mut R) -> Vec<Component> {
    (0..count)
        .map(|i| {
            let group = RANDOM_GROUPS[rng.next_index(RANDOM_GROUPS.len())];
            let label = format!("{}_{}", group, i + 100);
            let cost = 5.0 + rng.next_f64() * 90.0;
            let efficiency = 0.5 + rng.next_f64() * 0.5;
            let size = 1.0 + rng.next_f64() * 15.0;
            Component::new(RANDOM_ID_BASE + i as ComponentId, label, cost, efficiency, size)
        })
        .collect()
}

/// Summary statistics over a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub count: usize,
    pub mean_cost: f64,
    pub mean_efficiency: f64,
    pub mean_size: f64,
}

impl CatalogStats {
    /// Computes the statistics; every mean is `0.0` for an empty catalog.
    pub fn from_components(components: &[Component]) -> Self {
        let count = components.len();
        if count == 0 {
            return Self {
                count,
                mean_cost: 0.0,
                mean_efficiency: 0.0,
                mean_size: 0.0,
            };
        }

        let n = count as f64;
        Self {
            count,
            mean_cost: components.iter().map(|c| c.cost()).sum::<f64>() / n,
            mean_efficiency: components.iter().map(|c| c.efficiency()).sum::<f64>() / n,
            mean_size: components.iter().map(|c| c.size()).sum::<f64>() / n,
        }
    }
}
