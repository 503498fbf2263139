//! Domain entities representing identities, claims and issued tokens.

pub mod claims;
pub mod principal;
pub mod token;

#[cfg(test)]
mod tests;

pub use claims::{custom_claims, is_registered_claim, ClaimSet, REGISTERED_CLAIMS};
pub use principal::PrincipalToken;
pub use token::{mask_token, AccessToken, RefreshToken, TokenPair, ValidatedUser};
