//! Login form validation.
//!
//! Each validator checks its rules in a fixed order and reports the first
//! violation. Messages are the user-facing copy shown under the form fields,
//! so they stay in Korean like the rest of the UI text.

/// Outcome of one validation check. `message` is empty when `valid` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        ValidationResult {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: &str) -> Self {
        ValidationResult {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Validate a username: 2 to 63 characters after trimming, ASCII letters,
/// digits, and underscore only.
///
/// The empty check runs before the length checks so a blank field gets the
/// "please enter" message rather than the "too short" one.
pub fn validate_username(username: &str) -> ValidationResult {
    let trimmed = username.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return ValidationResult::fail("사용자 이름을 입력해주세요");
    }
    if len < 2 {
        return ValidationResult::fail("사용자 이름은 최소 2글자 이상이어야 합니다");
    }
    if len > 63 {
        return ValidationResult::fail("사용자 이름은 최대 63글자까지 가능합니다");
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return ValidationResult::fail("사용자 이름은 영문, 숫자, 언더스코어만 가능합니다");
    }
    ValidationResult::ok()
}

/// Validate password strength: at least 8 characters with at least one ASCII
/// letter and one digit. Whitespace counts; passwords are never trimmed.
pub fn validate_password(password: &str) -> ValidationResult {
    let len = password.chars().count();

    if len == 0 {
        return ValidationResult::fail("비밀번호를 입력해주세요");
    }
    if len < 8 {
        return ValidationResult::fail("비밀번호는 최소 8자 이상이어야 합니다");
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return ValidationResult::fail("비밀번호는 영문자와 숫자를 모두 포함해야 합니다");
    }
    ValidationResult::ok()
}

/// Check that the confirmation field matches the password exactly.
pub fn validate_password_match(password: &str, confirm: &str) -> ValidationResult {
    if password != confirm {
        return ValidationResult::fail("비밀번호가 일치하지 않습니다");
    }
    ValidationResult::ok()
}
