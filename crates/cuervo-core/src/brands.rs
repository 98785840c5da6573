use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::VisualStyle;
use crate::ConfigError;

/// Brand table shipped with the workspace. Used when no brands file is
/// configured on disk.
const BUILTIN_BRANDS: &str = include_str!("../../../config/brands.yaml");

/// Handles shorter than this are too generic to mark a hashtag as branded.
const MIN_BRANDED_TERM_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    #[serde(default)]
    pub handles: Vec<String>,
    /// Visual style assumed when a caption gives no stronger signal.
    #[serde(default)]
    pub visual_style: Option<VisualStyle>,
    /// Follower count used when an import has posts but no profile report.
    #[serde(default)]
    pub fallback_followers: Option<u64>,
}

impl BrandConfig {
    /// Generate a URL-safe slug from the brand name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// The brand name with everything but letters and digits removed,
    /// e.g. `"josecuervo"`. A hashtag containing it counts as branded.
    #[must_use]
    pub fn squashed_name(&self) -> String {
        normalize_handle(&self.name)
    }

    /// Terms that make a hashtag branded for this brand: the squashed name
    /// and every normalized handle of at least five characters.
    #[must_use]
    pub fn branded_terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = std::iter::once(self.squashed_name())
            .chain(self.handles.iter().map(|h| normalize_handle(h)))
            .filter(|t| t.len() >= MIN_BRANDED_TERM_LEN)
            .collect();
        terms.sort();
        terms.dedup();
        terms
    }
}

/// Whether `tag` carries one of `terms`. The tag is normalized the same way
/// as handles, so `#JoséCuervo` matches `josecuervo`.
#[must_use]
pub fn is_branded_hashtag(tag: &str, terms: &[String]) -> bool {
    let key = normalize_handle(tag);
    !key.is_empty() && terms.iter().any(|t| key.contains(t.as_str()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandsFile {
    /// Non-competitor accounts studied for inspiration only.
    #[serde(default)]
    pub reference_brands: Vec<String>,
    pub brands: Vec<BrandConfig>,
}

/// Load and validate the brands configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_brands(&content)
}

/// Parse and validate brands YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_brands(content: &str) -> Result<BrandsFile, ConfigError> {
    let brands_file: BrandsFile =
        serde_yaml::from_str(content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();
    let mut handle_owner: HashMap<String, &str> = HashMap::new();

    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        let lower_name = brand.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }

        let slug = brand.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand slug: '{}' (from brand '{}')",
                slug, brand.name
            )));
        }

        for handle in std::iter::once(&brand.name).chain(&brand.handles) {
            let key = normalize_handle(handle);
            if key.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' has a handle with no letters or digits: '{handle}'",
                    brand.name
                )));
            }
            match handle_owner.get(&key) {
                Some(owner) if *owner != brand.name => {
                    return Err(ConfigError::Validation(format!(
                        "handle '{handle}' maps to both '{owner}' and '{}'",
                        brand.name
                    )));
                }
                _ => {
                    handle_owner.insert(key, &brand.name);
                }
            }
        }
    }

    Ok(())
}

/// Reduce a handle or profile name to its comparison key: lowercase, accents
/// folded to ASCII, and every character that is not a letter or digit removed.
///
/// `"@Jose_Cuervo.Tequila"` and `"José Cuervo Tequila"` both become
/// `"josecuervotequila"`.
#[must_use]
pub fn normalize_handle(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Lookup table from social handles to canonical brands.
#[derive(Debug, Clone)]
pub struct BrandRegistry {
    brands: Vec<BrandConfig>,
    by_handle: HashMap<String, usize>,
    reference_brands: HashSet<String>,
}

impl BrandRegistry {
    #[must_use]
    pub fn new(file: BrandsFile) -> Self {
        let mut by_handle = HashMap::new();
        for (idx, brand) in file.brands.iter().enumerate() {
            for handle in std::iter::once(&brand.name).chain(&brand.handles) {
                by_handle.insert(normalize_handle(handle), idx);
            }
        }
        let reference_brands = file
            .reference_brands
            .iter()
            .map(|r| normalize_handle(r))
            .collect();
        Self {
            brands: file.brands,
            by_handle,
            reference_brands,
        }
    }

    /// Registry built from the brand table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded table fails to parse or validate.
    pub fn builtin() -> Result<Self, ConfigError> {
        parse_brands(BUILTIN_BRANDS).map(Self::new)
    }

    /// Load a registry from a brands YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_brands(path).map(Self::new)
    }

    #[must_use]
    pub fn brands(&self) -> &[BrandConfig] {
        &self.brands
    }

    /// Find a brand by canonical name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BrandConfig> {
        self.brands
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve a vendor profile name or handle to its canonical brand.
    ///
    /// Only an exact match on the normalized key counts. A handle that merely
    /// contains an alias (a fan account, a bar, a reseller) stays unresolved
    /// so the caller can report it.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&BrandConfig> {
        let key = normalize_handle(raw);
        if key.is_empty() {
            return None;
        }
        self.by_handle
            .get(&key)
            .and_then(|&idx| self.brands.get(idx))
    }

    /// Branded hashtag terms for a canonical brand name. A brand missing from
    /// the table falls back to its own squashed name.
    #[must_use]
    pub fn branded_terms(&self, brand: &str) -> Vec<String> {
        match self.get(brand) {
            Some(config) => config.branded_terms(),
            None => {
                let squashed = normalize_handle(brand);
                if squashed.is_empty() {
                    Vec::new()
                } else {
                    vec![squashed]
                }
            }
        }
    }

    /// Whether a qualitative-report identifier names a reference brand.
    #[must_use]
    pub fn is_reference(&self, identifier: &str) -> bool {
        self.reference_brands.contains(&normalize_handle(identifier))
    }
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
