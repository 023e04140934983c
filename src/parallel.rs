// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch queries over rayon's thread pool.
//!
//! A compiled [`Dawg`] is immutable, so one shared reference serves every
//! worker with no locking. Results come back in input order.

use rayon::prelude::*;

use crate::dawg::Dawg;
use crate::extract::extract_keywords;
use crate::fuzzy::{fuzzy_search, CostConfig, CostError};
use crate::types::{Fragment, FuzzyMatch};

/// [`Dawg::contains`] for every word.
pub fn contains_many<S>(dawg: &Dawg, words: &[S]) -> Vec<bool>
where
    S: AsRef<str> + Sync,
{
    words.par_iter().map(|w| dawg.contains(w.as_ref())).collect()
}

/// [`fuzzy_search`] for every query. Costs are validated once up front.
pub fn fuzzy_search_many<S>(
    dawg: &Dawg,
    queries: &[S],
    costs: &CostConfig,
) -> Result<Vec<Vec<FuzzyMatch>>, CostError>
where
    S: AsRef<str> + Sync,
{
    costs.validate()?;
    queries
        .par_iter()
        .map(|q| fuzzy_search(dawg, q.as_ref(), costs))
        .collect()
}

/// [`extract_keywords`] for every document.
pub fn extract_keywords_many<S>(dawg: &Dawg, documents: &[S]) -> Vec<Vec<Fragment>>
where
    S: AsRef<str> + Sync,
{
    documents
        .par_iter()
        .map(|doc| extract_keywords(dawg, doc.as_ref()))
        .collect()
}
