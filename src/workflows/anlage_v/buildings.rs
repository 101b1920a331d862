use super::property::{BuildingId, PropertyContext, UsageType};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Lookup of property records referenced by a filing.
pub trait BuildingRepository: Send + Sync {
    fn fetch(&self, id: &BuildingId) -> Result<Option<PropertyContext>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("building store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug)]
pub enum BuildingCatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidValue {
        building: String,
        column: &'static str,
        value: String,
    },
    DuplicateId(String),
}

impl std::fmt::Display for BuildingCatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildingCatalogError::Io(err) => write!(f, "failed to read building catalog: {}", err),
            BuildingCatalogError::Csv(err) => write!(f, "invalid building catalog CSV: {}", err),
            BuildingCatalogError::InvalidValue {
                building,
                column,
                value,
            } => write!(
                f,
                "building '{}' has an invalid {} value '{}'",
                building, column, value
            ),
            BuildingCatalogError::DuplicateId(id) => {
                write!(f, "building '{}' appears more than once", id)
            }
        }
    }
}

impl std::error::Error for BuildingCatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildingCatalogError::Io(err) => Some(err),
            BuildingCatalogError::Csv(err) => Some(err),
            BuildingCatalogError::InvalidValue { .. } | BuildingCatalogError::DuplicateId(_) => {
                None
            }
        }
    }
}

impl From<std::io::Error> for BuildingCatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BuildingCatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Read-only building records loaded from a CSV export of the entity store.
///
/// Expected header: `id,acquisition_price,year_built,usage_type,total_area`. Blank cells stay
/// unknown so the checks depending on them are skipped.
#[derive(Debug, Clone, Default)]
pub struct BuildingCatalog {
    buildings: BTreeMap<BuildingId, PropertyContext>,
}

impl BuildingCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BuildingCatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BuildingCatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut catalog = Self::default();

        for record in csv_reader.deserialize::<BuildingRow>() {
            let row = record?;
            let (id, context) = row.into_context()?;
            if catalog.buildings.contains_key(&id) {
                return Err(BuildingCatalogError::DuplicateId(id.0));
            }
            catalog.buildings.insert(id, context);
        }

        Ok(catalog)
    }

    pub fn insert(&mut self, id: BuildingId, context: PropertyContext) {
        self.buildings.insert(id, context);
    }

    pub fn get(&self, id: &BuildingId) -> Option<&PropertyContext> {
        self.buildings.get(id)
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

impl BuildingRepository for BuildingCatalog {
    fn fetch(&self, id: &BuildingId) -> Result<Option<PropertyContext>, RepositoryError> {
        Ok(self.get(id).cloned())
    }
}

#[derive(Debug, Deserialize)]
struct BuildingRow {
    id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    acquisition_price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    year_built: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    usage_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    total_area: Option<String>,
}

impl BuildingRow {
    fn into_context(self) -> Result<(BuildingId, PropertyContext), BuildingCatalogError> {
        let acquisition_price =
            parse_column(&self.id, "acquisition_price", self.acquisition_price)?;
        let year_built = parse_column(&self.id, "year_built", self.year_built)?;
        let total_area = parse_column(&self.id, "total_area", self.total_area)?;
        let usage_type = self.usage_type.as_deref().map(UsageType::parse);

        Ok((
            BuildingId(self.id),
            PropertyContext {
                acquisition_price,
                year_built,
                usage_type,
                total_area,
            },
        ))
    }
}

fn parse_column<T: std::str::FromStr>(
    building: &str,
    column: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, BuildingCatalogError> {
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|_| BuildingCatalogError::InvalidValue {
                building: building.to_string(),
                column,
                value,
            })
    })
    .transpose()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
