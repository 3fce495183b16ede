//! Form Validation
//!
//! Presence and equality checks run before any request is built. Each
//! failure carries the field-specific message the page alerts with.
//! Inputs are trimmed by the caller, so whitespace-only counts as empty.

pub fn login_fields(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err("Please enter a username.");
    }
    if password.is_empty() {
        return Err("Please enter a password.");
    }
    Ok(())
}

pub fn register_fields(
    username: &str,
    email: &str,
    password: &str,
    repeat_password: &str,
) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err("Please enter a username.");
    }
    if email.is_empty() {
        return Err("Please enter an email.");
    }
    if password.is_empty() {
        return Err("Please enter a password.");
    }
    if repeat_password.is_empty() {
        return Err("Please repeat your password.");
    }
    if password != repeat_password {
        return Err("Password and repeat password are not the same!");
    }
    Ok(())
}

pub fn ingredient_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Please enter ingredient name.");
    }
    Ok(())
}

pub fn recipe_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Please enter recipe name.");
    }
    Ok(())
}

pub fn recipe_fields(name: &str, instructions: &str) -> Result<(), &'static str> {
    recipe_name(name)?;
    if instructions.is_empty() {
        return Err("Please enter recipe instructions.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_reports_the_empty_field() {
        assert_eq!(login_fields("", "pw"), Err("Please enter a username."));
        assert_eq!(login_fields("chef", ""), Err("Please enter a password."));
        assert_eq!(login_fields("", ""), Err("Please enter a username."));
        assert_eq!(login_fields("chef", "pw"), Ok(()));
    }

    #[test]
    fn register_reports_first_empty_field() {
        assert_eq!(
            register_fields("", "a@b.c", "pw", "pw"),
            Err("Please enter a username.")
        );
        assert_eq!(
            register_fields("chef", "", "pw", "pw"),
            Err("Please enter an email.")
        );
        assert_eq!(
            register_fields("chef", "a@b.c", "", "pw"),
            Err("Please enter a password.")
        );
        assert_eq!(
            register_fields("chef", "a@b.c", "pw", ""),
            Err("Please repeat your password.")
        );
    }

    #[test]
    fn register_rejects_mismatched_passwords() {
        assert_eq!(
            register_fields("chef", "a@b.c", "pw1", "pw2"),
            Err("Password and repeat password are not the same!")
        );
        assert_eq!(register_fields("chef", "a@b.c", "pw", "pw"), Ok(()));
    }

    #[test]
    fn ingredient_and_recipe_fields_must_be_present() {
        assert_eq!(ingredient_name(""), Err("Please enter ingredient name."));
        assert_eq!(ingredient_name("Salt"), Ok(()));
        assert_eq!(recipe_fields("", "stir"), Err("Please enter recipe name."));
        assert_eq!(
            recipe_fields("Stew", ""),
            Err("Please enter recipe instructions.")
        );
        assert_eq!(recipe_fields("Stew", "stir"), Ok(()));
    }

    // Delete only collects a name; it shares the same check and message.
    #[test]
    fn recipe_name_alone_must_be_present() {
        assert_eq!(recipe_name(""), Err("Please enter recipe name."));
        assert_eq!(recipe_name("Stew"), Ok(()));
    }
}
