/// Price-history backend settings.
///
/// The backend serves `GET {base_url}/stock/{SYMBOL}` with a JSON body whose
/// `Close` field maps "YYYY-MM-DD" date strings to closing prices. Everything
/// else in the body is ignored. No retries and no request timeout here; the
/// service either answers or the fetch fails.
pub struct ApiConfig {
    pub base_url: &'static str,
    pub history_path: &'static str,
    pub default_symbol: &'static str,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://127.0.0.1:5000",
    history_path: "stock",
    default_symbol: "AAPL",
};
