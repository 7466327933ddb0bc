labeled_enum! {
    pub enum SubmissionStatus {
        #[default]
        New => ("new", "Mới"),
        Read => ("read", "Đã xem"),
        Replied => ("replied", "Đã phản hồi"),
        Archived => ("archived", "Lưu trữ"),
    }
}
