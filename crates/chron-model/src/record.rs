//! Canonical output records.
//!
//! Each mode has a typed record whose fields are exactly the mode's output
//! columns. Serialization emits the verbatim headers in the fixed order.

use serde::Serialize;

use crate::cell::CellValue;
use crate::code::Code;
use crate::fields::OutputColumn;

/// Columns shared by both report variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportRecord {
    #[serde(rename = "Kodi R")]
    pub kodi_r: CellValue,
    #[serde(rename = "Tipi procedures")]
    pub tipi_procedures: CellValue,
    #[serde(rename = "Lloji DAV (data e fatures)")]
    pub lloji_dav: CellValue,
    #[serde(rename = "kodi 4 shifror")]
    pub kodi_4_shifror: CellValue,
    #[serde(rename = "pershkrim")]
    pub pershkrim: CellValue,
    #[serde(rename = "Palet")]
    pub palet: CellValue,
    #[serde(rename = "Cmimi artikullit monedhe")]
    pub cmimi_artikullit_monedhe: CellValue,
    #[serde(rename = "Shuma paguar")]
    pub shuma_paguar: CellValue,
    #[serde(rename = "Pesha neto kg")]
    pub pesha_neto_kg: CellValue,
    #[serde(rename = "Vlera statistikore")]
    pub vlera_statistikore: CellValue,
    #[serde(rename = "Vlera e Fatures")]
    pub vlera_e_fatures: CellValue,
    #[serde(rename = "transp i brendshem (EUR)")]
    pub transp_brendshem_eur: CellValue,
}

impl ImportRecord {
    pub fn get(&self, column: OutputColumn) -> Option<&CellValue> {
        let value = match column {
            OutputColumn::KodiR => &self.kodi_r,
            OutputColumn::TipiProcedures => &self.tipi_procedures,
            OutputColumn::LlojiDav => &self.lloji_dav,
            OutputColumn::Kodi4 => &self.kodi_4_shifror,
            OutputColumn::Pershkrim => &self.pershkrim,
            OutputColumn::Palet => &self.palet,
            OutputColumn::CmimiArtikullitMonedhe => &self.cmimi_artikullit_monedhe,
            OutputColumn::ShumaPaguar => &self.shuma_paguar,
            OutputColumn::PeshaNeto => &self.pesha_neto_kg,
            OutputColumn::VleraStatistikore => &self.vlera_statistikore,
            OutputColumn::VleraFatures => &self.vlera_e_fatures,
            OutputColumn::TranspBrendshemEur => &self.transp_brendshem_eur,
            OutputColumn::EmriEksportuesit
            | OutputColumn::VlerePoliuretan
            | OutputColumn::VleraMallit => return None,
        };
        Some(value)
    }
}

/// Export record: the shared columns plus exporter and manual-value columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportRecord {
    #[serde(flatten)]
    pub base: ImportRecord,
    #[serde(rename = "Emri eksportuesit")]
    pub emri_eksportuesit: CellValue,
    #[serde(rename = "Vlere poliuretan")]
    pub vlere_poliuretan: CellValue,
    /// Left empty; filled in by hand downstream.
    #[serde(rename = "Vlera e mallit (calculated)")]
    pub vlera_e_mallit: CellValue,
}

impl ExportRecord {
    pub fn get(&self, column: OutputColumn) -> Option<&CellValue> {
        match column {
            OutputColumn::EmriEksportuesit => Some(&self.emri_eksportuesit),
            OutputColumn::VlerePoliuretan => Some(&self.vlere_poliuretan),
            OutputColumn::VleraMallit => Some(&self.vlera_e_mallit),
            other => self.base.get(other),
        }
    }
}

/// One output row in the fixed column order of its mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalRow {
    Import(ImportRecord),
    Export(ExportRecord),
}

impl CanonicalRow {
    pub fn code(&self) -> Code {
        match self {
            Self::Import(_) => Code::Im,
            Self::Export(_) => Code::Ex,
        }
    }

    pub fn columns(&self) -> &'static [OutputColumn] {
        self.code().output_columns()
    }

    /// Value of `column`, or `None` when the column is not part of this mode.
    pub fn get(&self, column: OutputColumn) -> Option<&CellValue> {
        match self {
            Self::Import(record) => record.get(column),
            Self::Export(record) => record.get(column),
        }
    }

    /// Stringified value of `column`; empty for columns outside this mode.
    pub fn text(&self, column: OutputColumn) -> String {
        self.get(column).map(ToString::to_string).unwrap_or_default()
    }

    /// Cells in output order.
    pub fn cells(&self) -> impl Iterator<Item = (OutputColumn, &CellValue)> + '_ {
        self.columns()
            .iter()
            .filter_map(move |column| self.get(*column).map(|value| (*column, value)))
    }
}
