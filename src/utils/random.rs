use rand::{thread_rng, Rng};

pub fn generate_random_code(length: usize) -> String {
    let mut rng = thread_rng();

    let code: String = (0..length)
        .map(|_| rng.gen_range(0..10).to_string())
        .collect();

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_requested_length_and_only_digits() {
        let code = generate_random_code(6);

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
