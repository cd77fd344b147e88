//! Procurement (pengadaan) groups and the known procurement methods.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Stage;

/// An ordered sequence of stages sharing one transaction name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Procurement {
    pub id: u64,

    #[serde(rename = "namaTransaksi")]
    pub transaction_name: String,

    /// Procurement method as sent by the backend (free text)
    #[serde(rename = "jenisPengadaan", default)]
    pub kind: String,

    #[serde(rename = "tahapanList", default)]
    pub stages: Vec<Stage>,
}

impl Procurement {
    /// Resolve [`Procurement::kind`] to a known method, if it is one.
    ///
    /// The kind may be a method code in any spelling (`Swakelola Tipe-1`)
    /// or a method's dashboard label, compared case-insensitively.
    pub fn method(&self) -> Option<ProcurementMethod> {
        let kind = self.kind.trim();
        method_code(kind).parse().ok().or_else(|| {
            ProcurementMethod::ALL
                .into_iter()
                .find(|method| method.label().eq_ignore_ascii_case(kind))
        })
    }

    /// Method label when the kind resolves, the raw kind otherwise.
    pub fn kind_label(&self) -> &str {
        self.method().map_or(self.kind.trim(), |method| method.label())
    }
}

/// Normalise a free-text method name to its code.
///
/// Uppercases, replaces every character outside `[A-Z0-9]` with `_`, and
/// collapses runs of `_`.
///
/// # Examples
///
/// ```rust
/// use pantau_core::models::method_code;
///
/// assert_eq!(method_code("Pengadaan Langsung"), "PENGADAAN_LANGSUNG");
/// assert_eq!(method_code("Swakelola  Tipe-1"), "SWAKELOLA_TIPE_1");
/// ```
pub fn method_code(name: &str) -> String {
    let mut code = String::with_capacity(name.len());
    for c in name.to_uppercase().chars() {
        let c = if c.is_ascii_uppercase() || c.is_ascii_digit() {
            c
        } else {
            '_'
        };
        if c == '_' && code.ends_with('_') {
            continue;
        }
        code.push(c);
    }
    code
}

/// Procurement methods recognised by the monitoring dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcurementMethod {
    PengadaanLangsung,
    #[serde(rename = "E_PURCHASING_NON_MS")]
    EPurchasingNonMarketSounding,
    #[serde(rename = "E_PURCHASING_MS")]
    EPurchasingMarketSounding,
    Seleksi,
    Tender,
    TenderEkh,
    #[serde(rename = "REPEAT_ORDER_PL")]
    RepeatOrder,
    #[serde(rename = "SWAKELOLA_TIPE_1")]
    SwakelolaTipe1,
    #[serde(rename = "SWAKELOLA_TIPE_2")]
    SwakelolaTipe2,
    #[serde(rename = "SWAKELOLA_TIPE_3")]
    SwakelolaTipe3,
    #[serde(rename = "SWAKELOLA_TIPE_4")]
    SwakelolaTipe4,
}

impl ProcurementMethod {
    pub const ALL: [ProcurementMethod; 11] = [
        ProcurementMethod::PengadaanLangsung,
        ProcurementMethod::EPurchasingNonMarketSounding,
        ProcurementMethod::EPurchasingMarketSounding,
        ProcurementMethod::Seleksi,
        ProcurementMethod::Tender,
        ProcurementMethod::TenderEkh,
        ProcurementMethod::RepeatOrder,
        ProcurementMethod::SwakelolaTipe1,
        ProcurementMethod::SwakelolaTipe2,
        ProcurementMethod::SwakelolaTipe3,
        ProcurementMethod::SwakelolaTipe4,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ProcurementMethod::PengadaanLangsung => "PENGADAAN_LANGSUNG",
            ProcurementMethod::EPurchasingNonMarketSounding => "E_PURCHASING_NON_MS",
            ProcurementMethod::EPurchasingMarketSounding => "E_PURCHASING_MS",
            ProcurementMethod::Seleksi => "SELEKSI",
            ProcurementMethod::Tender => "TENDER",
            ProcurementMethod::TenderEkh => "TENDER_EKH",
            ProcurementMethod::RepeatOrder => "REPEAT_ORDER_PL",
            ProcurementMethod::SwakelolaTipe1 => "SWAKELOLA_TIPE_1",
            ProcurementMethod::SwakelolaTipe2 => "SWAKELOLA_TIPE_2",
            ProcurementMethod::SwakelolaTipe3 => "SWAKELOLA_TIPE_3",
            ProcurementMethod::SwakelolaTipe4 => "SWAKELOLA_TIPE_4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcurementMethod::PengadaanLangsung => "Pengadaan Langsung",
            ProcurementMethod::EPurchasingNonMarketSounding => {
                "E-Purchasing (Non Market Sounding)"
            }
            ProcurementMethod::EPurchasingMarketSounding => "E-Purchasing (Market Sounding)",
            ProcurementMethod::Seleksi => "Seleksi",
            ProcurementMethod::Tender => "Tender",
            ProcurementMethod::TenderEkh => {
                "Tender (Melalui Proses Evaluasi Kewajaran Harga/EKH)"
            }
            ProcurementMethod::RepeatOrder => "Repeat Order/Penunjukan Langsung",
            ProcurementMethod::SwakelolaTipe1 => "Swakelola Tipe1",
            ProcurementMethod::SwakelolaTipe2 => "Swakelola Tipe2",
            ProcurementMethod::SwakelolaTipe3 => "Swakelola Tipe3",
            ProcurementMethod::SwakelolaTipe4 => "Swakelola Tipe4",
        }
    }
}

impl FromStr for ProcurementMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcurementMethod::ALL
            .into_iter()
            .find(|method| method.code() == s)
            .ok_or_else(|| format!("Unknown procurement method: {s}"))
    }
}
