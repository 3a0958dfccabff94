use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Reads the payload of an API token without checking its signature.
///
/// The client never holds the signing secret; the claims are only used for
/// display (user id, email, expiry). The API still verifies every request.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    match decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::warn!("Could not decode token claims: {}", e);
            None
        }
    }
}
