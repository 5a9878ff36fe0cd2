use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.output.as_deref() {
        validate_output_path(raw).map_err(|e| format!("invalid --output '{raw}': {e}"))?;
    }
    if let Some(raw) = args.input.as_deref() {
        if raw.trim().is_empty() {
            return Err("invalid --input, expected a file path".to_string());
        }
    }
    if let Some(raw) = args.comment_locale.as_deref() {
        crate::utils::parse_locale_tag(raw)
            .map_err(|e| format!("invalid --comment-locale '{raw}': {e}"))?;
    }
    Ok(())
}

pub fn validate_output_path(raw: &str) -> Result<(), String> {
    if raw.trim().is_empty() {
        return Err("expected a file path".to_string());
    }
    if crate::output::infer_format_from_path(raw).is_none() {
        return Err("expected a .html or .htm file".to_string());
    }
    Ok(())
}
