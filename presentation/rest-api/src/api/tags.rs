use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Pricing,
    Products,
    Catalog,
    Batches,
    Backups,
}
