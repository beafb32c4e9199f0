pub mod autofill;
