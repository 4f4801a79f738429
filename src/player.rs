//! Player identity persisted in browser local storage.

use rand::Rng;

/// Local storage key holding the generated name.
pub const USERNAME_KEY: &str = "username";

pub fn generate_username<R: Rng>(rng: &mut R) -> String {
    format!("Player{}", rng.gen_range(1000..=9999))
}

/// Returns the name to use and whether it was freshly generated (and so must
/// be written back to storage).
pub fn resolve_username<R: Rng>(stored: Option<String>, rng: &mut R) -> (String, bool) {
    match stored.map(|s| s.trim().to_string()) {
        Some(name) if !name.is_empty() => (name, false),
        _ => (generate_username(rng), true),
    }
}

pub fn welcome_text(name: &str) -> String {
    format!("Welcome, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_names_have_four_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let name = generate_username(&mut rng);
            let digits = name.strip_prefix("Player").expect("prefix");
            assert_eq!(digits.len(), 4);
            let n: u32 = digits.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn stored_name_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        let (name, fresh) = resolve_username(Some("Rowan".into()), &mut rng);
        assert_eq!(name, "Rowan");
        assert!(!fresh);
    }

    #[test]
    fn blank_stored_name_is_replaced() {
        let mut rng = StdRng::seed_from_u64(1);
        let (name, fresh) = resolve_username(Some("  ".into()), &mut rng);
        assert!(name.starts_with("Player"));
        assert!(fresh);
    }

    #[test]
    fn welcome_text_format() {
        assert_eq!(welcome_text("Player1234"), "Welcome, Player1234!");
    }
}
