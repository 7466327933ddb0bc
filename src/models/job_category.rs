labeled_enum! {
    pub enum JobCategory {
        Mechanical => ("mechanical", "Cơ khí"),
        Electronics => ("electronics", "Điện - Điện tử"),
        FoodProcessing => ("food-processing", "Chế biến thực phẩm"),
        Construction => ("construction", "Xây dựng"),
        Agriculture => ("agriculture", "Nông nghiệp"),
        Textile => ("textile", "Dệt may"),
        Nursing => ("nursing", "Điều dưỡng"),
        #[default]
        Other => ("other", "Ngành khác"),
    }
}
