//! Command implementations.

use anyhow::{Context, Result};
use comfy_table::Table;

use lexref_cli::browse::{BrowseOptions, BrowseResult, browse_rows};
use lexref_cli::render::apply_table_style;
use lexref_data::{
    Page, default_data_root, load_amendments, load_case_law, load_legal_concepts, load_penal_code,
    main_menu,
};

use crate::cli::BrowseArgs;

pub fn run_pages() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Page", "Slug", "Data file", "Filter keys"]);
    apply_table_style(&mut table);
    for page in main_menu() {
        let columns = page.columns();
        let filter_keys: Vec<&str> = columns.filterable().map(|c| c.id.as_str()).collect();
        table.add_row(vec![
            page.title().to_string(),
            page.slug().to_string(),
            page.data_file().to_string(),
            filter_keys.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_browse(args: &BrowseArgs) -> Result<BrowseResult> {
    let page: Page = args.page.into();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_root);
    let options = BrowseOptions {
        state: args.state.clone(),
        page_number: args.page_number,
        per_page: args.per_page,
        sort: args.sort.clone(),
        filters: args.filters.clone(),
        clear_filters: args.clear_filters,
    };
    match page {
        Page::PenalCode => {
            let rows = load_penal_code(&data_dir).context("load penal code")?;
            browse_rows(&rows, page, &options)
        }
        Page::CaseLaw => {
            let rows = load_case_law(&data_dir).context("load case law")?;
            browse_rows(&rows, page, &options)
        }
        Page::Amendments => {
            let rows = load_amendments(&data_dir).context("load amendments")?;
            browse_rows(&rows, page, &options)
        }
        Page::LegalConcepts => {
            let rows = load_legal_concepts(&data_dir).context("load legal concepts")?;
            browse_rows(&rows, page, &options)
        }
    }
}
