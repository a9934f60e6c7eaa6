mod tax_treatment;

pub use tax_treatment::TaxTreatment;
