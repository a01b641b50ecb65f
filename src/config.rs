
pub const APPLICATION_SUBMIT_PATH: &str = "/api/application/submit";

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("APPLY_API_URL") {
        Some(url) => url,
        None => "http://localhost:3001", // Development URL when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("APPLY_API_URL") {
        Some(url) => url,
        None => "", // Production URL
    }
}

pub fn application_submit_url() -> String {
    format!("{}{}", get_backend_url(), APPLICATION_SUBMIT_PATH)
}
