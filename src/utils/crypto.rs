use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use data_encoding::BASE32_NOPAD;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub async fn hash_password(password: String) -> Result<String, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;

    Ok(password_hash.to_string())
}

pub async fn verify_password_hash(
    password: String,
    hash: String,
) -> Result<bool, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash.as_str())?;

    match argon2.verify_password(password.as_bytes(), &hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

pub fn generate_uuid() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn generate_token() -> String {
    let mut bytes = [0u8; 20];

    rand::thread_rng().fill_bytes(&mut bytes);

    BASE32_NOPAD.encode(&bytes).to_lowercase()
}

// Slugs end up in shared URLs, so they stay short.
pub fn generate_slug() -> String {
    let mut bytes = [0u8; 6];

    rand::thread_rng().fill_bytes(&mut bytes);

    BASE32_NOPAD.encode(&bytes).to_lowercase()
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();

    hasher.update(token);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn password_verifies_against_its_own_hash() {
        let hash = hash_password(String::from("hunter2hunter2")).await.unwrap();

        let ok = verify_password_hash(String::from("hunter2hunter2"), hash.clone())
            .await
            .unwrap();
        assert!(ok);

        let wrong = verify_password_hash(String::from("not-the-password"), hash)
            .await
            .unwrap();
        assert!(!wrong);
    }

    #[test]
    fn slugs_are_shorter_than_session_tokens() {
        let slug = generate_slug();

        assert!(slug.len() < generate_token().len());
        assert_eq!(slug, slug.to_lowercase());
    }

    #[test]
    fn token_hash_is_stable() {
        assert_eq!(hash_token("abc"), hash_token("abc"));
        assert_ne!(hash_token("abc"), hash_token("abd"));
    }
}
