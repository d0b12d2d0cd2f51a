//! Static B3 ticker universes used when the caller supplies none.

/// Ibovespa members (manual list; the index composition changes every four
/// months, callers wanting the live list should inject their own universe).
pub const IBOVESPA: &[&str] = &[
    "ABEV3.SA", "ALPA4.SA", "AMER3.SA", "ASAI3.SA", "AZUL4.SA",
    "B3SA3.SA", "BBAS3.SA", "BBDC3.SA", "BBDC4.SA", "BBSE3.SA",
    "BEEF3.SA", "BPAC11.SA", "BRAP4.SA", "BRFS3.SA", "BRKM5.SA",
    "CASH3.SA", "CCRO3.SA", "CIEL3.SA", "CMIG4.SA", "CMIN3.SA",
    "COGN3.SA", "CPFE3.SA", "CPLE6.SA", "CRFB3.SA", "CSAN3.SA",
    "CSNA3.SA", "CVCB3.SA", "CYRE3.SA", "DXCO3.SA", "EGIE3.SA",
    "ELET3.SA", "ELET6.SA", "EMBR3.SA", "ENEV3.SA", "ENGI11.SA",
    "EQTL3.SA", "EZTC3.SA", "FLRY3.SA", "GGBR4.SA", "GOAU4.SA",
    "GOLL4.SA", "HAPV3.SA", "HYPE3.SA", "IGTI11.SA", "IRBR3.SA",
    "ITSA4.SA", "ITUB4.SA", "JBSS3.SA", "KLBN11.SA", "LREN3.SA",
    "LWSA3.SA", "MGLU3.SA", "MRFG3.SA", "MRVE3.SA", "MULT3.SA",
    "NTCO3.SA", "PCAR3.SA", "PETR3.SA", "PETR4.SA", "PETZ3.SA",
    "PRIO3.SA", "RADL3.SA", "RAIL3.SA", "RAIZ4.SA", "RDOR3.SA",
    "RENT3.SA", "RRRP3.SA", "SANB11.SA", "SBSP3.SA", "SLCE3.SA",
    "SMTO3.SA", "SOMA3.SA", "SUZB3.SA", "TAEE11.SA", "TIMS3.SA",
    "TOTS3.SA", "UGPA3.SA", "USIM5.SA", "VALE3.SA", "VBBR3.SA",
    "VIIA3.SA", "VIVT3.SA", "WEGE3.SA", "YDUQ3.SA",
];

/// Curated small/mid caps outside the index.
pub const EXTRAS: &[&str] = &[
    "AESB3.SA", "AURE3.SA", "AZEV4.SA", "BMGB4.SA", "BRSR6.SA",
    "CEAB3.SA", "CGAS5.SA", "CSMG3.SA", "CXSE3.SA", "DIRR3.SA",
    "EVEN3.SA", "FESA4.SA", "FRAS3.SA", "GRND3.SA", "HBOR3.SA",
    "JHSF3.SA", "KEPL3.SA", "LOGG3.SA", "MDIA3.SA", "MOVI3.SA",
    "ODPV3.SA", "POMO4.SA", "POSI3.SA", "PTBL3.SA", "QUAL3.SA",
    "ROMI3.SA", "SAPR11.SA", "SEER3.SA", "TASA4.SA", "TGMA3.SA",
    "TUPY3.SA", "VULC3.SA", "WIZS3.SA",
];

/// Minimal high-liquidity list for degraded operation.
pub const FALLBACK: &[&str] = &[
    "PETR4.SA", "VALE3.SA", "ITUB4.SA", "BBDC4.SA", "B3SA3.SA",
    "ABEV3.SA", "WEGE3.SA", "RENT3.SA", "BBAS3.SA", "SUZB3.SA",
];

/// The full default universe: Ibovespa plus the curated extras.
pub fn default_universe() -> Vec<String> {
    IBOVESPA
        .iter()
        .chain(EXTRAS.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Normalize a user-supplied ticker into B3 `.SA` form.
///
/// Accepts an already-suffixed ticker, or the bare B3 shape of four letters
/// followed by one or two digits (e.g. `PETR4`, `ENGI11`). Returns `None`
/// for anything else.
pub fn normalize_ticker(ticker: &str) -> Option<String> {
    let trimmed = ticker.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if let Some(base) = upper.strip_suffix(".SA") {
        return is_b3_shape(base).then_some(upper);
    }
    is_b3_shape(&upper).then(|| format!("{upper}.SA"))
}

fn is_b3_shape(base: &str) -> bool {
    let bytes = base.as_bytes();
    if !(5..=6).contains(&bytes.len()) {
        return false;
    }
    bytes[..4].iter().all(|b| b.is_ascii_alphabetic())
        && bytes[4..].iter().all(|b| b.is_ascii_digit())
}
