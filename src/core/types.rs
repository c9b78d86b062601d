use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice record decoded from a Portuguese invoice QR code.
///
/// Field letters refer to the codes used in the QR payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortugalInvoice {
    /// A: NIF of the issuer.
    pub remitent_nif: String,
    /// B: NIF of the buyer ("999999990" for final consumers).
    pub client_nif: String,
    /// C: Country of the buyer.
    pub client_country: String,
    /// D: Document type (e.g. "FT", "FS", "FR", "NC").
    pub document_type: String,
    /// E: Document status (e.g. "N" normal, "A" cancelled).
    pub document_status: String,
    /// F: Document date as written in the payload (`YYYYMMDD`).
    pub document_date: String,
    /// G: Unique document identification.
    pub document_id: String,
    /// H: ATCUD, the unique document code assigned by the tax authority.
    #[serde(rename = "ATCUD")]
    pub atcud: String,
    /// I / J / K: Tax breakdown per country region. Never empty once parsed.
    pub tax_country_regions: Vec<TaxCountryRegion>,
    /// L: Amount not subject to VAT.
    pub not_taxable_in_vat: Option<Decimal>,
    /// M: Stamp duty.
    pub stamp_duty: Option<Decimal>,
    /// N: Total taxes.
    pub total_taxes: Decimal,
    /// O: Document total including taxes.
    pub total_document_with_taxes: Decimal,
    /// P: Withholding tax. Zero when absent from the payload.
    pub withholding_taxes: Decimal,
    /// Q: Four characters of the document signature hash.
    pub hash: String,
    /// R: Software certificate number.
    pub certificate_number: String,
    /// S: Free-form additional information.
    pub other_information: Option<String>,
}

impl PortugalInvoice {
    /// Interpret the document date (`YYYYMMDD`) as a calendar date.
    ///
    /// Returns `None` if the payload value is not a real date.
    pub fn document_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.document_date, "%Y%m%d").ok()
    }

    /// Whether the buyer is registered in Portugal.
    pub fn is_portuguese_client(&self) -> bool {
        self.client_country == "PT"
    }

    /// Sum of VAT totals over all tax country regions.
    pub fn total_vat(&self) -> Decimal {
        self.tax_country_regions
            .iter()
            .map(TaxCountryRegion::total_vat)
            .sum()
    }
}

/// Tax breakdown for one country region (jurisdiction block I, J or K).
///
/// Only the region code is mandatory; every amount is absent unless the
/// payload carried the corresponding sub-field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCountryRegion {
    /// x1: Region code ("PT", "PT-AC", "PT-MA", or an ISO country code).
    pub tax_country_region: String,
    /// x2: Taxable base exempt of VAT.
    #[serde(rename = "taxableBaseExemptOfVAT")]
    pub taxable_base_exempt: Option<Decimal>,
    /// x3: Taxable base at the reduced rate.
    #[serde(rename = "taxableBaseOfVATAtReducedRate")]
    pub taxable_base_reduced_rate: Option<Decimal>,
    /// x4: VAT at the reduced rate.
    #[serde(rename = "totalVATAtReducedRate")]
    pub total_vat_reduced_rate: Option<Decimal>,
    /// x5: Taxable base at the intermediate rate.
    #[serde(rename = "taxableBaseOfVATAtAIntermediateRate")]
    pub taxable_base_intermediate_rate: Option<Decimal>,
    /// x6: VAT at the intermediate rate.
    #[serde(rename = "totalVATAtIntermediateRate")]
    pub total_vat_intermediate_rate: Option<Decimal>,
    /// x7: Taxable base at the standard rate.
    #[serde(rename = "taxableBaseOfVATAtAStandardRate")]
    pub taxable_base_standard_rate: Option<Decimal>,
    /// x8: VAT at the standard rate.
    #[serde(rename = "totalVATAtStandardRate")]
    pub total_vat_standard_rate: Option<Decimal>,
}

impl TaxCountryRegion {
    /// Create a region with the given code and no amounts.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            tax_country_region: region.into(),
            ..Default::default()
        }
    }

    /// Sum of the VAT totals present (reduced, intermediate, standard).
    pub fn total_vat(&self) -> Decimal {
        [
            self.total_vat_reduced_rate,
            self.total_vat_intermediate_rate,
            self.total_vat_standard_rate,
        ]
        .into_iter()
        .flatten()
        .sum()
    }

    /// Sum of the taxable bases present, exempt base included.
    pub fn total_taxable_base(&self) -> Decimal {
        [
            self.taxable_base_exempt,
            self.taxable_base_reduced_rate,
            self.taxable_base_intermediate_rate,
            self.taxable_base_standard_rate,
        ]
        .into_iter()
        .flatten()
        .sum()
    }

    /// Amount stored for `field`, if the payload carried it.
    pub fn amount(&self, field: TaxRegionField) -> Option<Decimal> {
        match field {
            TaxRegionField::ExemptBase => self.taxable_base_exempt,
            TaxRegionField::ReducedBase => self.taxable_base_reduced_rate,
            TaxRegionField::ReducedVat => self.total_vat_reduced_rate,
            TaxRegionField::IntermediateBase => self.taxable_base_intermediate_rate,
            TaxRegionField::IntermediateVat => self.total_vat_intermediate_rate,
            TaxRegionField::StandardBase => self.taxable_base_standard_rate,
            TaxRegionField::StandardVat => self.total_vat_standard_rate,
        }
    }

    /// Present amounts in payload order (index 2 to 8).
    pub fn amounts(&self) -> impl Iterator<Item = (TaxRegionField, Decimal)> + '_ {
        TaxRegionField::ALL
            .into_iter()
            .filter_map(|field| self.amount(field).map(|value| (field, value)))
    }

    /// Mutable slot holding the amount for `field`.
    pub fn amount_slot_mut(&mut self, field: TaxRegionField) -> &mut Option<Decimal> {
        match field {
            TaxRegionField::ExemptBase => &mut self.taxable_base_exempt,
            TaxRegionField::ReducedBase => &mut self.taxable_base_reduced_rate,
            TaxRegionField::ReducedVat => &mut self.total_vat_reduced_rate,
            TaxRegionField::IntermediateBase => &mut self.taxable_base_intermediate_rate,
            TaxRegionField::IntermediateVat => &mut self.total_vat_intermediate_rate,
            TaxRegionField::StandardBase => &mut self.taxable_base_standard_rate,
            TaxRegionField::StandardVat => &mut self.total_vat_standard_rate,
        }
    }
}

/// Amount sub-fields of a tax country region, by payload index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxRegionField {
    /// 2 — Taxable base exempt of VAT.
    ExemptBase,
    /// 3 — Taxable base at the reduced rate.
    ReducedBase,
    /// 4 — VAT at the reduced rate.
    ReducedVat,
    /// 5 — Taxable base at the intermediate rate.
    IntermediateBase,
    /// 6 — VAT at the intermediate rate.
    IntermediateVat,
    /// 7 — Taxable base at the standard rate.
    StandardBase,
    /// 8 — VAT at the standard rate.
    StandardVat,
}

impl TaxRegionField {
    /// All amount sub-fields in payload order.
    pub const ALL: [Self; 7] = [
        Self::ExemptBase,
        Self::ReducedBase,
        Self::ReducedVat,
        Self::IntermediateBase,
        Self::IntermediateVat,
        Self::StandardBase,
        Self::StandardVat,
    ];

    /// Payload index following the region letter.
    pub fn index(&self) -> u8 {
        match self {
            Self::ExemptBase => 2,
            Self::ReducedBase => 3,
            Self::ReducedVat => 4,
            Self::IntermediateBase => 5,
            Self::IntermediateVat => 6,
            Self::StandardBase => 7,
            Self::StandardVat => 8,
        }
    }

    /// Parse from payload index. Index 1 is the region code, not an amount.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            2 => Some(Self::ExemptBase),
            3 => Some(Self::ReducedBase),
            4 => Some(Self::ReducedVat),
            5 => Some(Self::IntermediateBase),
            6 => Some(Self::IntermediateVat),
            7 => Some(Self::StandardBase),
            8 => Some(Self::StandardVat),
            _ => None,
        }
    }
}
