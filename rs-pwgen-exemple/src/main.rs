use rs_pwgen_core::{Alphabet, Generator, SeededRandom};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log level is read from RUST_LOG ("debug" shows every run)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Start from the default tables and adjust a few options
    let mut alphabet = Alphabet::default();

    // Length bounds must be set in a valid order (or both at once)
    alphabet.set_lengths(10, 14)?;

    // Attempting to set an inverted bound
    match alphabet.set_min_length(20) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }

    // Three trailing digits, at least two special characters
    alphabet.set_digits(3);
    alphabet.set_num_special_chars(2);

    // Warp half of the eligible characters
    alphabet.set_warp_characters_chance(50)?;

    // 'q' is rare but allowed
    alphabet.set_consonants_str("bcdfghjklmnpqrstvwxz");

    // Double-letter tables accept a space separated list.
    // The "anywhere" table is derived when the generator is built.
    alphabet.set_double_consonants_first_str("bl br cl cr dr fl fr gl gr pl pr st tr")?;

    let generator = Generator::new(alphabet)?;
    if let Some(anywhere) = generator.alphabet().double_consonants_anywhere() {
        println!("Double consonants anywhere: {}", anywhere.join(" "));
    }

    // Generate 10 passwords using the configured bounds
    for (i, password) in generator.generate_many(10)?.iter().enumerate() {
        println!("Generated password {}: {}", i + 1, password);
    }

    // One-shot bounds are normalized (max raised to min)
    println!("One-shot password: {}", generator.create(16, 12)?);

    // A seeded source replays the same password
    let seed = 42;
    let first = generator.generate_with(&mut SeededRandom::new(seed))?;
    let second = generator.generate_with(&mut SeededRandom::new(seed))?;
    println!("Seed {}: {} / {}", seed, first, second);

    // Default alphabet, default bounds
    println!(
        "Default password: {}",
        rs_pwgen_core::create(rs_pwgen_core::DEFAULT_MIN_LENGTH, rs_pwgen_core::DEFAULT_MAX_LENGTH)?
    );

    tracing::info!("done");
    Ok(())
}
