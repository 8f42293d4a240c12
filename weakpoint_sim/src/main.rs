//! Weak point simulator - Runs many seeded attacks against a configured profile
//!
//! Shows:
//! - How often each weak point is selected for a given skill and attack type
//! - Which status effects fire and how much damage lands
//! - The attacker learning weak point proficiencies through practice

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use weakpoint_core::{
    config::load_profiles, default_profiles, resolve_weakpoint_hit, AttackContext, AttackType,
    ConfigError, Creature, CreatureState, DamageInstance, DamageType, Resistances, WeakPointProfile,
    WeakPointRegistry,
};

#[derive(Parser, Debug)]
#[command(name = "weakpoint_sim")]
#[command(about = "Simulate weak point selection against a configured creature profile")]
struct Args {
    /// Profile file (TOML); the bundled profiles are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Profile id to attack
    #[arg(long, default_value = "zombie")]
    profile: String,

    /// Number of attacks to simulate
    #[arg(long, default_value_t = 10_000)]
    attacks: u32,

    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fixed weak point skill; computed from the attacker when omitted
    #[arg(long)]
    skill: Option<f64>,

    /// How the attack is delivered
    #[arg(long, value_enum, default_value_t = Delivery::Bash)]
    attack_type: Delivery,

    /// Treat every attack as a critical hit
    #[arg(long, default_value_t = false)]
    crit: bool,

    /// Start the target bleeding, enabling wound weak points
    #[arg(long, default_value_t = false)]
    bleeding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Delivery {
    Bash,
    Cut,
    Stab,
    Ranged,
}

impl Delivery {
    fn damage(self) -> DamageInstance {
        let damage_type = match self {
            Delivery::Bash => DamageType::Bash,
            Delivery::Cut => DamageType::Cut,
            Delivery::Stab => DamageType::Stab,
            Delivery::Ranged => DamageType::Bullet,
        };
        DamageInstance::single(damage_type, 20.0)
    }

    fn attack_type(self, damage: &DamageInstance) -> AttackType {
        match self {
            Delivery::Ranged => AttackType::Projectile,
            _ => AttackType::of_melee_damage(damage),
        }
    }
}

/// Tallies over a simulation run
#[derive(Debug, Default)]
struct Report {
    selections: BTreeMap<String, u32>,
    effects: BTreeMap<String, u32>,
    total_damage: f64,
    learned_at: Vec<(u32, String)>,
}

fn load_registry(args: &Args) -> Result<WeakPointRegistry, ConfigError> {
    match &args.config {
        Some(path) => load_profiles(path),
        None => Ok(default_profiles()),
    }
}

fn run(args: &Args, profile: &WeakPointProfile) -> Report {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut report = Report::default();

    let mut attacker = CreatureState::new("you", 100.0).with_skill(2.0).as_avatar();
    for family in &profile.families.families {
        attacker = attacker.learning(family.proficiency.clone(), Duration::from_secs(30));
    }

    let mut defender = CreatureState::new(profile.id.clone(), 120.0).with_resistances(
        Resistances::new()
            .with(DamageType::Bash, 4.0)
            .with(DamageType::Cut, 6.0)
            .with(DamageType::Stab, 5.0)
            .with(DamageType::Bullet, 3.0),
    );
    if args.bleeding {
        defender = defender.with_effect("bleed");
    }

    let damage = args.attack_type.damage();
    let attack_type = args.attack_type.attack_type(&damage);

    for attack in 0..args.attacks {
        let mut ctx = AttackContext::new(&defender, attack_type)
            .with_source(&attacker)
            .crit(args.crit);
        match args.skill {
            Some(skill) => ctx.skill = skill,
            None => ctx.compute_skill(&profile.families),
        }

        let (_, hit) =
            resolve_weakpoint_hit(&profile.weakpoints, &ctx, &defender, &damage, &mut rng);

        let label = if hit.hit_weakpoint {
            hit.weakpoint_id.clone()
        } else {
            "(none)".to_string()
        };
        *report.selections.entry(label).or_insert(0) += 1;
        for effect in &hit.effects_applied {
            *report.effects.entry(effect.effect.to_string()).or_insert(0) += 1;
        }
        report.total_damage += hit.total_damage;

        if hit.hit_weakpoint && profile.families.practice_hit(&mut attacker) {
            let names: Vec<String> = profile
                .families
                .families
                .iter()
                .filter(|f| attacker.has_proficiency(&f.proficiency))
                .map(|f| f.id.clone())
                .collect();
            tracing::info!("attacker learned weak point proficiencies after attack {}", attack + 1);
            report.learned_at.push((attack + 1, names.join(", ")));
        }
    }

    report
}

fn print_report(args: &Args, report: &Report) {
    println!("\n{}", "=".repeat(60));
    println!(
        "  {} attacks on '{}' ({:?}, seed {})",
        args.attacks, args.profile, args.attack_type, args.seed
    );
    println!("  Each attack deals {}", args.attack_type.damage().damage_breakdown());
    println!("{}\n", "=".repeat(60));

    println!("  Weak point selections:");
    for (id, count) in &report.selections {
        let rate = *count as f64 / args.attacks.max(1) as f64 * 100.0;
        println!("    {:<24} {:>7} ({:>5.1}%)", id, count, rate);
    }

    println!("\n  Effects caused:");
    if report.effects.is_empty() {
        println!("    (none)");
    }
    for (effect, count) in &report.effects {
        println!("    {:<24} {:>7}", effect, count);
    }

    println!(
        "\n  Average damage per attack: {:.2}",
        report.total_damage / args.attacks.max(1) as f64
    );

    for (attack, families) in &report.learned_at {
        println!("  Learned [{}] after attack {}", families, attack);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let registry = match load_registry(&args) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!("failed to load weak point profiles: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let Some(profile) = registry.get(&args.profile) else {
        tracing::error!(
            "unknown profile '{}'; available: {}",
            args.profile,
            registry.ids().join(", ")
        );
        return ExitCode::FAILURE;
    };

    let report = run(&args, profile);
    print_report(&args, &report);
    ExitCode::SUCCESS
}
