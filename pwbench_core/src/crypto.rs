use argon2::{
    password_hash::{rand_core::OsRng, Error as HashError, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Argon2 error: {0}")]
    Argon2(#[from] HashError),
    #[error("Argon2 params error: {0}")]
    Params(#[from] argon2::Error),
}

/// Argon2id cost bundle. Memory is in KiB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostProfile {
    pub m_cost_kib: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl CostProfile {
    /// RFC 9106 second recommended option ("low-memory"):
    /// 64 MiB, 3 passes, 4 lanes.
    pub const RFC9106_LOW_MEMORY: CostProfile = CostProfile {
        m_cost_kib: 64 * 1024,
        t_cost: 3,
        p_cost: 4,
    };
}

pub struct Argon2Context {
    params: Params,
    profile: CostProfile,
}

impl Default for Argon2Context {
    fn default() -> Self {
        // The RFC 9106 low-memory profile is valid by construction.
        Self::with_profile(CostProfile::RFC9106_LOW_MEMORY).unwrap()
    }
}

impl Argon2Context {
    pub fn new(memory_cost_kib: u32, time_cost: u32, parallelism: u32) -> Result<Self, CryptoError> {
        Self::with_profile(CostProfile {
            m_cost_kib: memory_cost_kib,
            t_cost: time_cost,
            p_cost: parallelism,
        })
    }

    pub fn with_profile(profile: CostProfile) -> Result<Self, CryptoError> {
        let params = Params::new(
            profile.m_cost_kib,
            profile.t_cost,
            profile.p_cost,
            Some(Params::DEFAULT_OUTPUT_LEN),
        )
        .map_err(CryptoError::Params)?;
        Ok(Self { params, profile })
    }

    pub fn profile(&self) -> CostProfile {
        self.profile
    }

    /// Hashes `password` with a fresh random salt and returns the full
    /// PHC-encoded string (`$argon2id$v=19$m=...,t=...,p=...$salt$digest`).
    pub fn hash_encoded(&self, password: &[u8]) -> Result<String, CryptoError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(password, &salt)
            .map_err(CryptoError::Argon2)?;

        Ok(password_hash.to_string())
    }
}
