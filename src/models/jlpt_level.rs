labeled_enum! {
    pub enum JlptLevel {
        N1 => ("N1", "N1"),
        N2 => ("N2", "N2"),
        N3 => ("N3", "N3"),
        N4 => ("N4", "N4"),
        #[default]
        N5 => ("N5", "N5"),
    }
}
