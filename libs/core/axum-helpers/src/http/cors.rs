use axum::http::{HeaderValue, Method, header};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Creates a CORS layer for the catalog API.
///
/// - Only the listed origins
/// - GET, POST and OPTIONS (the catalog has no other verbs)
/// - Content-Type and Accept headers
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated origins).
///
/// Production requires the variable. Development falls back to a permissive
/// layer when it is unset.
///
/// # Errors
/// Returns `InvalidInput` when the variable is required but missing, empty,
/// or contains a value that is not a valid header value.
pub fn cors_layer_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(raw) => {
            let origins = parse_origins(&raw)?;
            info!("CORS configured with allowed origins: {}", raw);
            Ok(create_cors_layer(origins))
        }
        Err(_) if environment.is_development() => {
            warn!("CORS_ALLOWED_ORIGIN not set, using permissive CORS (development only)");
            Ok(create_permissive_cors_layer())
        }
        Err(_) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required in production. Example: CORS_ALLOWED_ORIGIN=https://shop.example.com",
        )),
    }
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://localhost:3000 , ,https://shop.example.com").unwrap();
        assert_eq!(
            origins,
            [
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://shop.example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_origins_rejects_empty_list() {
        let err = parse_origins(" , ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_origins_rejects_control_characters() {
        assert!(parse_origins("http://bad\norigin").is_err());
    }

    #[test]
    fn test_production_requires_origin() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env(&Environment::Production).is_err());
            assert!(cors_layer_from_env(&Environment::Development).is_ok());
        });
    }

    #[test]
    fn test_production_with_origin() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("https://shop.example.com"), || {
            assert!(cors_layer_from_env(&Environment::Production).is_ok());
        });
    }
}
