//! Password hashing wrappers around bcrypt. The cost factor comes from the
//! environment-keyed config so tests and development stay fast.

use bcrypt::BcryptError;

use crate::config;

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    let cost = config::config().security.bcrypt_cost;
    bcrypt::hash(password, cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hash)
}
