use crate::{
    error::{AppError, Result},
    utils::jwt::Claims,
};

pub fn extract_user_id(claims: &Claims) -> Result<i32> {
    claims
        .sub
        .parse::<i32>()
        .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "user@example.com".to_string(),
            exp: 0,
        }
    }

    #[test]
    fn parses_numeric_subject() {
        assert_eq!(extract_user_id(&claims("42")).unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_subject() {
        assert!(matches!(
            extract_user_id(&claims("not-a-number")),
            Err(AppError::Unauthorized(_))
        ));
    }
}
