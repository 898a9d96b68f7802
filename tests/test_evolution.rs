use circuit_ga::{
    catalog::{random_components, sample_components},
    constraints::CircuitConstraints,
    error::Result,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel, Termination},
    report::SolutionReport,
    rng::RandomNumberGenerator,
    strategy::CombinatorialBreedStrategy,
    GeneticError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_sample_catalog_run() -> Result<()> {
    init_tracing();

    let catalog = sample_components();
    let options = EvolutionOptions::builder()
        .population_size(40)
        .num_generations(60)
        .log_level(LogLevel::Minimal)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let launcher = EvolutionLauncher::new(CombinatorialBreedStrategy::default());
    let mut result = launcher.evolve(&catalog, &options, &mut rng)?;

    assert!(result.is_feasible());
    assert!(result.score > 0.0);
    assert_eq!(result.history.len(), result.generations);
    assert!(result.generations <= 60);
    if result.termination == Termination::TargetReached {
        assert!(result.score > options.get_target_fitness());
    }

    let report = SolutionReport::new(&mut result.chromosome, catalog.len());
    assert_eq!(report.fitness, result.score);
    assert!(report.budget_utilization <= 100.0);
    assert!(report.area_utilization <= 100.0);
    let counted: usize = report.categories.iter().map(|c| c.count).sum();
    assert_eq!(counted, result.chromosome.component_count());

    Ok(())
}

#[test]
fn test_evolution_improves_on_initial_population() -> Result<()> {
    let catalog = sample_components();
    let launcher = EvolutionLauncher::default();

    let initial_only = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(0)
        .target_fitness(f64::MAX)
        .build();
    let full = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(80)
        .target_fitness(f64::MAX)
        .build();

    let before = launcher.evolve(&catalog, &initial_only, &mut RandomNumberGenerator::from_seed(7))?;
    let after = launcher.evolve(&catalog, &full, &mut RandomNumberGenerator::from_seed(7))?;

    // Both runs start from the same seeded initial population.
    assert_eq!(after.history[0], before.score);
    assert!(after.score >= before.score);
    assert_eq!(after.termination, Termination::GenerationLimit);

    Ok(())
}

#[test]
fn test_verbose_run_on_generated_catalog() -> Result<()> {
    init_tracing();

    let mut rng = RandomNumberGenerator::from_seed(2025);
    let catalog = random_components(120, &mut rng);
    let options = EvolutionOptions::builder()
        .population_size(25)
        .num_generations(10)
        .log_level(LogLevel::Verbose)
        .build();

    let result = EvolutionLauncher::default().evolve(&catalog, &options, &mut rng)?;

    assert!(result.chromosome.components().iter().all(|c| c.id() >= 1000));
    assert!(result.score.is_finite());

    Ok(())
}

#[test]
fn test_parallel_and_sequential_evaluation_agree() -> Result<()> {
    let catalog = sample_components();
    let launcher = EvolutionLauncher::default();
    let mut sequential = EvolutionOptions::builder()
        .population_size(64)
        .num_generations(20)
        .target_fitness(f64::MAX)
        .build();
    let mut parallel = sequential.clone();
    sequential.set_parallel_threshold(usize::MAX);
    parallel.set_parallel_threshold(1);

    let a = launcher.evolve(&catalog, &sequential, &mut RandomNumberGenerator::from_seed(99))?;
    let b = launcher.evolve(&catalog, &parallel, &mut RandomNumberGenerator::from_seed(99))?;

    assert_eq!(a.history, b.history);
    assert_eq!(a.chromosome.components(), b.chromosome.components());

    Ok(())
}

#[test]
fn test_tight_constraints() -> Result<()> {
    let catalog = sample_components();
    let options = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(40)
        .constraints(CircuitConstraints::new(60.0, 10.0, 0.9))
        .build();
    let mut rng = RandomNumberGenerator::from_seed(13);

    let result = EvolutionLauncher::default().evolve(&catalog, &options, &mut rng)?;

    assert_eq!(*result.chromosome.constraints(), CircuitConstraints::new(60.0, 10.0, 0.9));
    if result.is_feasible() {
        assert!(result.chromosome.total_cost() <= 60.0);
        assert!(result.chromosome.total_size() <= 10.0);
    } else {
        assert!(result.score < 0.0);
    }

    Ok(())
}

#[test]
fn test_invalid_options_are_rejected() {
    let catalog = sample_components();
    let mut rng = RandomNumberGenerator::from_seed(0);
    let launcher = EvolutionLauncher::default();

    let cases = [
        EvolutionOptions::builder().population_size(0).build(),
        EvolutionOptions::builder().tournament_size(0).build(),
        EvolutionOptions::builder().population_size(2).tournament_size(3).build(),
        EvolutionOptions::builder().mutation_rate(1.5).build(),
        EvolutionOptions::builder().crossover_rate(-0.1).build(),
        EvolutionOptions::builder().elitism_rate(2.0).build(),
        EvolutionOptions::builder().target_fitness(f64::NAN).build(),
        EvolutionOptions::builder()
            .constraints(CircuitConstraints::new(0.0, 100.0, 0.6))
            .build(),
    ];

    for options in &cases {
        let result = launcher.evolve(&catalog, options, &mut rng);
        assert!(
            matches!(result, Err(GeneticError::Configuration(_))),
            "expected a configuration error for {:?}",
            options
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_options_from_json_file() -> Result<()> {
    let path = std::env::temp_dir().join("circuit_ga_test_options.json");
    std::fs::write(
        &path,
        r#"{ "population_size": 24, "num_generations": 5, "constraints": { "budget": 500.0 } }"#,
    )?;

    let options = EvolutionOptions::from_json_file(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(options.get_population_size(), 24);
    assert_eq!(options.get_constraints().budget, 500.0);
    assert_eq!(options.get_constraints().area, 100.0);

    let catalog = sample_components();
    let result = EvolutionLauncher::default().evolve(
        &catalog,
        &options,
        &mut RandomNumberGenerator::from_seed(1),
    )?;
    assert!(result.chromosome.total_cost() <= 500.0 || !result.is_feasible());

    Ok(())
}
