pub mod genage_csv;
