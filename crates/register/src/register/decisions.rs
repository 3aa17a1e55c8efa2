use serde::{Deserialize, Serialize};
use std::io::Write;

/// Recognition decision outcomes for one country within a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionCountry {
    pub code: String,
    pub yes: u32,
    pub no: u32,
    pub yes_after_comp: u32,
    pub no_after_comp: u32,
}

impl DecisionCountry {
    pub fn total(&self) -> u32 {
        self.yes + self.no + self.yes_after_comp + self.no_after_comp
    }
}

/// A named application route with per-country decision counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRoute {
    pub name: String,
    pub countries: Vec<DecisionCountry>,
}

/// One year of recognition decision data for a profession regulated by an
/// organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionDataset {
    pub profession_name: String,
    pub organisation_name: String,
    pub year: u16,
    pub routes: Vec<DecisionRoute>,
}

pub const DECISION_COLUMNS: [&str; 9] = [
    "Profession",
    "Regulator",
    "Year",
    "Route",
    "Country",
    "Yes",
    "No",
    "Yes after compensation measure",
    "No after compensation measure",
];

/// Writes datasets as one CSV row per (dataset, route, country), ordered by
/// profession, then organisation, then most recent year first.
pub fn export_csv<W: Write>(
    datasets: &[DecisionDataset],
    writer: W,
) -> Result<usize, csv::Error> {
    let mut sorted: Vec<&DecisionDataset> = datasets.iter().collect();
    sorted.sort_by(|a, b| {
        a.profession_name
            .cmp(&b.profession_name)
            .then_with(|| a.organisation_name.cmp(&b.organisation_name))
            .then_with(|| b.year.cmp(&a.year))
    });

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(DECISION_COLUMNS)?;

    let mut rows = 1;
    for dataset in sorted {
        for route in &dataset.routes {
            for country in &route.countries {
                csv_writer.write_record([
                    dataset.profession_name.as_str(),
                    dataset.organisation_name.as_str(),
                    &dataset.year.to_string(),
                    route.name.as_str(),
                    country.code.as_str(),
                    &country.yes.to_string(),
                    &country.no.to_string(),
                    &country.yes_after_comp.to_string(),
                    &country.no_after_comp.to_string(),
                ])?;
                rows += 1;
            }
        }
    }
    csv_writer.flush()?;

    Ok(rows)
}
