//! Middleware for logging requests and responses.

use axum::{extract::Request, http::header::CONTENT_TYPE, middleware::Next, response::Response};

const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and the full body logged at the `debug` level. Password form fields are
/// redacted before logging.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();

    let is_form_post = parts.method == axum::http::Method::POST
        && parts.headers.get(CONTENT_TYPE)
            == Some(&"application/x-www-form-urlencoded".parse().unwrap());

    if is_form_post {
        let display_text = redact_field(&body_text, "password");
        log_body("Received request", &format!("{parts:#?}"), &display_text);
    } else {
        log_body("Received request", &format!("{parts:#?}"), &body_text);
    }

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let body_text = String::from_utf8_lossy(&body_bytes).to_string();
    log_body("Sending response", &format!("{parts:#?}"), &body_text);

    Response::from_parts(parts, body_text.into())
}

/// Replace the value of `field_name` in a urlencoded form body with
/// asterisks.
fn redact_field(form_text: &str, field_name: &str) -> String {
    let field_prefix = format!("{field_name}=");
    let start = match form_text.find(&field_prefix) {
        Some(position) => position,
        None => return form_text.to_string(),
    };

    let end = form_text[start..]
        .find('&')
        .map(|offset| start + offset)
        .unwrap_or(form_text.len());
    let field = &form_text[start..end];

    form_text.replace(field, &format!("{field_prefix}********"))
}

fn log_body(direction: &str, headers: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "{direction}: {headers}\nbody: {:}...",
            truncate_to_char_boundary(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{direction}: {headers}\nbody: {body:?}");
    }
}

/// Cut `text` to at most `limit` bytes without splitting a multibyte
/// character. Slicing at a fixed byte index panics when the index lands
/// inside a character, e.g. an accented letter in a form body.
fn truncate_to_char_boundary(text: &str, limit: usize) -> &str {
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

#[cfg(test)]
mod logging_tests {
    use super::{LOG_BODY_LENGTH_LIMIT, log_body, redact_field, truncate_to_char_boundary};

    #[test]
    fn redacts_password_field() {
        let body = "username=claire&password=hunter2&redirect_url=%2Fadmin";

        let redacted = redact_field(body, "password");

        assert_eq!(
            redacted,
            "username=claire&password=********&redirect_url=%2Fadmin"
        );
    }

    #[test]
    fn redacts_password_field_at_end_of_body() {
        let body = "username=claire&password=hunter2";

        let redacted = redact_field(body, "password");

        assert_eq!(redacted, "username=claire&password=********");
    }

    #[test]
    fn leaves_body_without_password_unchanged() {
        let body = "name=Posters";

        assert_eq!(redact_field(body, "password"), body);
    }

    #[test]
    fn truncation_backs_off_to_a_char_boundary() {
        // The 'é' occupies bytes 63..65, straddling the length limit.
        let body = format!("{}é and then some", "a".repeat(63));

        let truncated = truncate_to_char_boundary(&body, LOG_BODY_LENGTH_LIMIT);

        assert_eq!(truncated, "a".repeat(63));
    }

    #[test]
    fn truncation_keeps_a_character_ending_on_the_limit() {
        let body = format!("{}é and then some", "a".repeat(62));

        let truncated = truncate_to_char_boundary(&body, LOG_BODY_LENGTH_LIMIT);

        assert_eq!(truncated, format!("{}é", "a".repeat(62)));
    }

    #[test]
    fn logging_a_long_multibyte_body_does_not_panic() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::sink)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let body = format!("name={}é&password=hunter2", "a".repeat(58));

            log_body("Received request", "", &body);
        });
    }
}
