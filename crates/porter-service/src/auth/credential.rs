use argon2::{
    Argon2, PasswordHasher,
    password_hash::{
        SaltString,
        rand_core::{OsRng, RngCore},
    },
};
use base64::Engine;

use crate::error::{ServiceError, ServiceResult};

const INITIAL_CREDENTIAL_BYTES: usize = 24;

/// ## Summary
/// Generates a random initial credential for a provisioned account.
///
/// Accounts created from an asserted identity always sign in through the
/// upstream webserver, so nobody is ever told this value.
#[must_use]
pub fn generate_initial_credential() -> String {
    let mut bytes = [0u8; INITIAL_CREDENTIAL_BYTES];
    OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// ## Summary
/// Hashes a credential using Argon2id with a random salt.
///
/// ## Errors
/// Returns an error if hashing fails.
pub fn hash_credential(credential: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(credential.as_bytes(), &salt)
        .map_err(|e| ServiceError::CredentialError(format!("Failed to hash credential: {e}")))?;

    Ok(hash.to_string())
}
