labeled_enum! {
    pub enum RecruitmentStatus {
        #[default]
        Active => ("active", "Đang tuyển"),
        Paused => ("paused", "Tạm dừng"),
        Closed => ("closed", "Đã đóng"),
    }
}
