/// Phoneme inventory accepted in pronunciation fields.
///
/// Each base symbol is followed by its `0`-marked variant. The `J0*` symbols
/// are iotated vowels.
const SYMBOLS: [&str; 68] = [
    "A", "A0", "B", "B0", "D", "D0", "F", "F0", "G", "G0", //
    "K", "K0", "L", "L0", "M", "M0", "N", "N0", "P", "P0", //
    "R", "R0", "S", "S0", "SH", "SH0", "T", "T0", "V", "V0", //
    "Y", "Y0", "Z", "Z0", "ZH", "ZH0", "J", "J0", "I", "I0", //
    "O", "O0", "E", "E0", "KH", "KH0", "GH", "GH0", "TS", "TS0", //
    "DZ", "DZ0", "TSH", "TSH0", "DZH", "DZH0", "U", "U0", "J0A", "J0A0", //
    "J0O", "J0O0", "J0U", "J0U0", "J0I", "J0I0", "J0E", "J0E0",
];

/// All valid symbols in canonical order
pub fn symbols() -> &'static [&'static str] {
    &SYMBOLS
}

/// Exact, case-sensitive membership test
pub fn is_valid_symbol(token: &str) -> bool {
    SYMBOLS.contains(&token)
}
