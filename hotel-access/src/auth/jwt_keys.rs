use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyFamily {
    Hmac,
    Rsa,
    Ec,
    Ed,
}

impl From<Algorithm> for KeyFamily {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => KeyFamily::Hmac,
            Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512 => KeyFamily::Rsa,
            Algorithm::ES256 | Algorithm::ES384 => KeyFamily::Ec,
            Algorithm::EdDSA => KeyFamily::Ed,
        }
    }
}

///
/// Parses comma separated list of JWT algorithms.
/// Returns the first algorithm, which selects how the key is read, and the whole list.
///
/// ### Errors
/// - when any of the algorithms is unknown
/// - when list is empty
/// - when algorithms do not belong to the same family,
///   because all of them are verified with one key
///
pub fn parse_jwt_algorithms(jwt_algorithms: &str) -> anyhow::Result<(Algorithm, Vec<Algorithm>)> {
    let algorithms = jwt_algorithms
        .split(',')
        .map(str::trim)
        .filter(|algorithm| !algorithm.is_empty())
        .map(|algorithm| {
            Algorithm::from_str(algorithm)
                .map_err(|err| anyhow!("invalid algorithm {algorithm}: {err}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let Some(first) = algorithms.first().copied() else {
        return Err(anyhow!("at least one algorithm is required"));
    };
    let family = KeyFamily::from(first);
    if algorithms
        .iter()
        .any(|algorithm| KeyFamily::from(*algorithm) != family)
    {
        return Err(anyhow!("algorithms must belong to the same family"));
    }

    Ok((first, algorithms))
}

///
/// Creates key used to verify JWT signed with the algorithm.
/// HMAC keys are plain secrets, other keys are PEM encoded.
///
pub fn parse_jwt_key(jwt_algorithm: Algorithm, jwt_key: &str) -> anyhow::Result<DecodingKey> {
    let jwt_key_bytes = jwt_key.as_bytes();

    let key = match KeyFamily::from(jwt_algorithm) {
        KeyFamily::Hmac => DecodingKey::from_secret(jwt_key_bytes),
        KeyFamily::Rsa => DecodingKey::from_rsa_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid rsa pem key: {err}"))?,
        KeyFamily::Ec => DecodingKey::from_ec_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ec pem key: {err}"))?,
        KeyFamily::Ed => DecodingKey::from_ed_pem(jwt_key_bytes)
            .map_err(|err| anyhow!("invalid ed pem key: {err}"))?,
    };

    Ok(key)
}
