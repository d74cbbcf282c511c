//! Catalog
//!
//! A read-only snapshot of presentations and promotions, loaded from YAML.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    presentations::{Presentation, PresentationId},
    promotions::Promotion,
    records::{PresentationRecord, PromotionRecord, RecordError},
};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A presentation id appears more than once
    #[error("duplicate presentation id: {0}")]
    DuplicatePresentation(PresentationId),

    /// A record could not be converted
    #[error("invalid record {id}: {source}")]
    Record {
        /// Record id
        id: u64,
        /// Conversion failure
        #[source]
        source: RecordError,
    },
}

/// Catalog file layout.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// ISO currency code for every amount in the file
    pub currency: String,

    /// Presentation rows
    #[serde(default)]
    pub presentations: Vec<PresentationRecord>,

    /// Promotion rows, in catalog order
    #[serde(default)]
    pub promotions: Vec<PromotionRecord>,
}

/// Presentations and promotions priced in a single currency.
#[derive(Debug)]
pub struct Catalog {
    currency: &'static Currency,
    presentations: Vec<Presentation<'static>>,
    presentation_index: FxHashMap<PresentationId, usize>,
    promotions: Vec<Promotion<'static>>,
}

impl Catalog {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// record is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_yaml(&contents)?;

        info!(
            path = %path.as_ref().display(),
            presentations = catalog.presentations.len(),
            promotions = catalog.promotions.len(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or if any record is
    /// invalid.
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(contents)?;

        Self::from_records(&file.currency, file.presentations, file.promotions)
    }

    /// Build a catalog from storage records.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is unknown, a presentation id is
    /// repeated, or any record is invalid.
    pub fn from_records(
        currency_code: &str,
        presentations: Vec<PresentationRecord>,
        promotions: Vec<PromotionRecord>,
    ) -> Result<Self, CatalogError> {
        let currency = iso::find(currency_code.trim())
            .ok_or_else(|| CatalogError::UnknownCurrency(currency_code.to_string()))?;

        let mut catalog = Self {
            currency,
            presentations: Vec::with_capacity(presentations.len()),
            presentation_index: FxHashMap::default(),
            promotions: Vec::with_capacity(promotions.len()),
        };

        for record in presentations {
            let id = record.id;
            let presentation = record
                .into_presentation(currency)
                .map_err(|source| CatalogError::Record { id, source })?;

            if catalog
                .presentation_index
                .insert(presentation.id, catalog.presentations.len())
                .is_some()
            {
                return Err(CatalogError::DuplicatePresentation(presentation.id));
            }

            catalog.presentations.push(presentation);
        }

        for record in promotions {
            let id = record.id;
            let promotion = record
                .into_promotion(currency)
                .map_err(|source| CatalogError::Record { id, source })?;

            catalog.promotions.push(promotion);
        }

        Ok(catalog)
    }

    /// Currency every amount is expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Look up a presentation by id.
    pub fn presentation(&self, id: PresentationId) -> Option<&Presentation<'static>> {
        self.presentation_index
            .get(&id)
            .and_then(|idx| self.presentations.get(*idx))
    }

    /// All presentations, in file order.
    pub fn presentations(&self) -> &[Presentation<'static>] {
        &self.presentations
    }

    /// All promotions, in catalog order.
    pub fn promotions(&self) -> &[Promotion<'static>] {
        &self.promotions
    }

    /// Promotions targeting `id`, in catalog order.
    pub fn promotions_for(
        &self,
        id: PresentationId,
    ) -> impl Iterator<Item = &Promotion<'static>> {
        self.promotions
            .iter()
            .filter(move |promotion| promotion.presentation == id)
    }
}
