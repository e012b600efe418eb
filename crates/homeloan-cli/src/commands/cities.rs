use clap::Args;
use serde_json::{json, Value};

use homeloan_core::cities::fallback_cities;
use homeloan_core::cities::lookup::{CityList, CityLookup, CitySource};
use homeloan_core::lead_form::select::ControlledSelect;
use homeloan_core::HomeLoanConfig;

/// Arguments for the city list
#[derive(Args)]
pub struct CitiesArgs {
    /// Skip the remote lookup and print the built-in list
    #[arg(long)]
    pub offline: bool,

    /// Only cities containing this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
}

pub fn run_cities(args: CitiesArgs, config: &HomeLoanConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let list = if args.offline {
        CityList {
            cities: fallback_cities(),
            source: CitySource::Fallback,
        }
    } else {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(CityLookup::new(config.cities.clone()).load())
    };

    let mut select = ControlledSelect::loading(
        config.form.property_location_label.clone(),
        format!("Select {}", config.form.property_location_label),
    );
    select.set_options(list.cities);
    let matches: Vec<Value> = select
        .search(args.search.as_deref().unwrap_or(""))
        .into_iter()
        .map(|city| json!({ "city": city }))
        .collect();

    Ok(json!({
        "results": matches,
        "source": list.source,
    }))
}
