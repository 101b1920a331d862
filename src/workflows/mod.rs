pub mod anlage_v;
