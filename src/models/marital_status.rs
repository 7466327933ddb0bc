labeled_enum! {
    pub enum MaritalStatus {
        #[default]
        Single => ("single", "Độc thân"),
        Married => ("married", "Đã kết hôn"),
        Other => ("other", "Khác"),
    }
}
