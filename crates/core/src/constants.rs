/// Endpoint used when `configure` does not supply a usable base URL.
pub const DEFAULT_BASE_URL: &str = "https://dynalinks.app/api/v1";
