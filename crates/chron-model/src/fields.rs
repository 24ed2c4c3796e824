//! Canonical source fields and the fixed output columns.
//!
//! Source fields are located in each uploaded file through their alias
//! lists; output columns are the verbatim headers of the generated report.

use std::fmt;

/// A semantic column that must be found regardless of its literal header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    KodiR,
    TipiProcedures,
    LlojiDav,
    Kodi8,
    GdsDs3,
    Palet,
    CmimiArtMonedhe,
    ShumaPaguar,
    PeshaNeto,
    VleraStat,
    VleraFatures,
    TranspBrendshemEur,
    EmriEksportuesit,
}

impl CanonicalField {
    pub const ALL: [Self; 13] = [
        Self::KodiR,
        Self::TipiProcedures,
        Self::LlojiDav,
        Self::Kodi8,
        Self::GdsDs3,
        Self::Palet,
        Self::CmimiArtMonedhe,
        Self::ShumaPaguar,
        Self::PeshaNeto,
        Self::VleraStat,
        Self::VleraFatures,
        Self::TranspBrendshemEur,
        Self::EmriEksportuesit,
    ];

    /// Stable identifier of the field.
    pub fn id(self) -> &'static str {
        match self {
            Self::KodiR => "kodi_r",
            Self::TipiProcedures => "tipi_procedures",
            Self::LlojiDav => "lloji_dav",
            Self::Kodi8 => "kodi8",
            Self::GdsDs3 => "gds_ds3",
            Self::Palet => "palet",
            Self::CmimiArtMonedhe => "cmimi_art_monedhe",
            Self::ShumaPaguar => "shuma_paguar",
            Self::PeshaNeto => "pesha_neto",
            Self::VleraStat => "vlera_stat",
            Self::VleraFatures => "vlera_fatures",
            Self::TranspBrendshemEur => "transp_brendshem_eur",
            Self::EmriEksportuesit => "emri_eksportuesit",
        }
    }

    /// Accepted header spellings, most specific first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::KodiR => &["Numri R"],
            Self::TipiProcedures => &["Tipi procedures"],
            Self::LlojiDav => &[
                "Lloji DAV",
                "Lloji DAV (data e fatures)",
                "Lloji DAV (data e faturës)",
            ],
            Self::Kodi8 => &["Kodi 8 shifror"],
            Self::GdsDs3 => &["Gds Ds3", "Pershkrimi"],
            Self::Palet => &["Tar Sup Qty1 SUM", "Tar Sup Qty1"],
            Self::CmimiArtMonedhe => &["Cmimi artikullit monedhe"],
            Self::ShumaPaguar => &["Shuma paguar"],
            Self::PeshaNeto => &["Pesha neto kg"],
            Self::VleraStat => &["Vlera statistikore"],
            Self::VleraFatures => &["Vlera e Fatures"],
            Self::TranspBrendshemEur => &["transp i brend", "Transp brend ne leke"],
            Self::EmriEksportuesit => &["Emri eksportuesit"],
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A column of the generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputColumn {
    KodiR,
    TipiProcedures,
    LlojiDav,
    Kodi4,
    Pershkrim,
    Palet,
    CmimiArtikullitMonedhe,
    ShumaPaguar,
    PeshaNeto,
    VleraStatistikore,
    VleraFatures,
    TranspBrendshemEur,
    EmriEksportuesit,
    VlerePoliuretan,
    VleraMallit,
}

/// Import report columns, in order.
pub const IMPORT_COLUMNS: [OutputColumn; 12] = [
    OutputColumn::KodiR,
    OutputColumn::TipiProcedures,
    OutputColumn::LlojiDav,
    OutputColumn::Kodi4,
    OutputColumn::Pershkrim,
    OutputColumn::Palet,
    OutputColumn::CmimiArtikullitMonedhe,
    OutputColumn::ShumaPaguar,
    OutputColumn::PeshaNeto,
    OutputColumn::VleraStatistikore,
    OutputColumn::VleraFatures,
    OutputColumn::TranspBrendshemEur,
];

/// Export report columns: the import columns followed by three more.
pub const EXPORT_COLUMNS: [OutputColumn; 15] = [
    OutputColumn::KodiR,
    OutputColumn::TipiProcedures,
    OutputColumn::LlojiDav,
    OutputColumn::Kodi4,
    OutputColumn::Pershkrim,
    OutputColumn::Palet,
    OutputColumn::CmimiArtikullitMonedhe,
    OutputColumn::ShumaPaguar,
    OutputColumn::PeshaNeto,
    OutputColumn::VleraStatistikore,
    OutputColumn::VleraFatures,
    OutputColumn::TranspBrendshemEur,
    OutputColumn::EmriEksportuesit,
    OutputColumn::VlerePoliuretan,
    OutputColumn::VleraMallit,
];

impl OutputColumn {
    /// Verbatim report header.
    pub fn header(self) -> &'static str {
        match self {
            Self::KodiR => "Kodi R",
            Self::TipiProcedures => "Tipi procedures",
            Self::LlojiDav => "Lloji DAV (data e fatures)",
            Self::Kodi4 => "kodi 4 shifror",
            Self::Pershkrim => "pershkrim",
            Self::Palet => "Palet",
            Self::CmimiArtikullitMonedhe => "Cmimi artikullit monedhe",
            Self::ShumaPaguar => "Shuma paguar",
            Self::PeshaNeto => "Pesha neto kg",
            Self::VleraStatistikore => "Vlera statistikore",
            Self::VleraFatures => "Vlera e Fatures",
            Self::TranspBrendshemEur => "transp i brendshem (EUR)",
            Self::EmriEksportuesit => "Emri eksportuesit",
            Self::VlerePoliuretan => "Vlere poliuretan",
            Self::VleraMallit => "Vlera e mallit (calculated)",
        }
    }
}

impl fmt::Display for OutputColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_headers_are_verbatim() {
        let headers: Vec<&str> = IMPORT_COLUMNS.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            vec![
                "Kodi R",
                "Tipi procedures",
                "Lloji DAV (data e fatures)",
                "kodi 4 shifror",
                "pershkrim",
                "Palet",
                "Cmimi artikullit monedhe",
                "Shuma paguar",
                "Pesha neto kg",
                "Vlera statistikore",
                "Vlera e Fatures",
                "transp i brendshem (EUR)",
            ]
        );
    }

    #[test]
    fn export_order_extends_import_order() {
        assert_eq!(&EXPORT_COLUMNS[..IMPORT_COLUMNS.len()], &IMPORT_COLUMNS[..]);
        let tail: Vec<&str> = EXPORT_COLUMNS[IMPORT_COLUMNS.len()..]
            .iter()
            .map(|c| c.header())
            .collect();
        assert_eq!(
            tail,
            vec![
                "Emri eksportuesit",
                "Vlere poliuretan",
                "Vlera e mallit (calculated)"
            ]
        );
    }

    #[test]
    fn every_field_has_aliases() {
        for field in CanonicalField::ALL {
            assert!(!field.aliases().is_empty(), "{field} has no aliases");
        }
    }
}
