labeled_enum! {
    /// Which side of a facility section the primary image sits on.
    pub enum Layout {
        #[default]
        Left => ("left", "Ảnh bên trái"),
        Right => ("right", "Ảnh bên phải"),
    }
}
