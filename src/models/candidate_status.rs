labeled_enum! {
    pub enum CandidateStatus {
        #[default]
        Active => ("active", "Đang xét duyệt"),
        Inactive => ("inactive", "Ngừng xét duyệt"),
        Hired => ("hired", "Đã tuyển"),
    }
}
