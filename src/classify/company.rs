use ahash::AHashMap;

use crate::{config::StyleConfig, record::PoleRecord};

/// Canonical form of a company name.
///
/// Surrounding whitespace is trimmed and inner runs collapse to one space. Configured aliases
/// and known company names are matched case-insensitively and replaced by their canonical spelling.
pub fn canonical_company(name: &str, styles: &StyleConfig) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = collapsed.to_lowercase();

    if let Some(alias) = styles.company_aliases.iter().find(|a| a.alias.to_lowercase() == lower) {
        return alias.canonical.clone();
    }
    if let Some(known) = styles.known_companies.iter().find(|k| k.name.to_lowercase() == lower) {
        return known.name.clone();
    }
    collapsed
}

/// Distinct canonical companies of a record, in column order.
pub(crate) fn record_companies(record: &PoleRecord, styles: &StyleConfig) -> Vec<String> {
    let mut companies = Vec::with_capacity(record.companies.len());
    for name in record.companies.iter().map(|c| canonical_company(c, styles)) {
        if !companies.contains(&name) { companies.push(name) }
    }
    companies
}

/// Run-scoped mapping from canonical company name to marker color.
///
/// Known companies keep their configured colors. Other companies receive palette colors in
/// first-seen order, wrapping around (and so repeating colors) once the palette is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyColorTable {
    entries: Vec<(String, String)>,
    index: AHashMap<String, usize>,
}

impl CompanyColorTable {
    /// Scan records in row order, then column order, assigning colors to every company seen.
    pub fn build(records: &[PoleRecord], styles: &StyleConfig) -> Self {
        let mut table = Self::default();
        for known in &styles.known_companies {
            table.insert(known.name.clone(), known.color.clone());
        }

        let mut next = 0;
        for record in records {
            for name in record.companies.iter().map(|c| canonical_company(c, styles)) {
                if table.index.contains_key(&name) { continue }
                let color = styles.palette_color(next).to_string();
                table.insert(name, color);
                next += 1;
            }
        }
        table
    }

    fn insert(&mut self, name: String, color: String) {
        if self.index.contains_key(&name) { return }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, color));
    }

    /// Color assigned to a canonical company name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].1.as_str())
    }

    /// `(company, color)` pairs: known companies first, then others in first-seen order.
    #[inline]
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), color.as_str()))
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
