pub mod badges;
pub mod help;
pub mod root;
pub mod swatches;
