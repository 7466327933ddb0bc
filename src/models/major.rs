labeled_enum! {
    pub enum Major {
        MechanicalEngineering => ("mechanical-engineering", "Kỹ thuật cơ khí"),
        ElectricalEngineering => ("electrical-engineering", "Kỹ thuật điện"),
        InformationTechnology => ("information-technology", "Công nghệ thông tin"),
        Automation => ("automation", "Tự động hóa"),
        Economics => ("economics", "Kinh tế"),
        JapaneseLanguage => ("japanese-language", "Ngôn ngữ Nhật"),
        #[default]
        Other => ("other", "Khác"),
    }
}
