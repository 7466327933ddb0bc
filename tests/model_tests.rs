mod common;

#[cfg(test)]
pub mod model_tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use corpsite::models::*;
    use corpsite::services::{Resource, Singleton};

    #[test]
    fn test_job_category_parse_success() {
        assert_eq!("food-processing".parse::<JobCategory>(), Ok(JobCategory::FoodProcessing));
        assert_eq!(" Nursing ".parse::<JobCategory>(), Ok(JobCategory::Nursing));
    }

    #[test]
    fn test_job_category_parse_fails_on_unknown_value() {
        assert!("astronaut".parse::<JobCategory>().is_err());
        assert!("".parse::<JobCategory>().is_err());
    }

    #[test]
    fn test_labeled_enum_defaults() {
        assert_eq!(JobCategory::default(), JobCategory::Other);
        assert_eq!(RecruitmentStatus::default(), RecruitmentStatus::Active);
        assert_eq!(CandidateStatus::default(), CandidateStatus::Active);
        assert_eq!(JlptLevel::default(), JlptLevel::N5);
        assert_eq!(MaritalStatus::default(), MaritalStatus::Single);
        assert_eq!(Layout::default(), Layout::Left);
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::New);
    }

    #[test]
    fn test_labeled_enum_options_cover_all_variants() {
        let options = SubmissionStatus::options();
        assert_eq!(options.len(), SubmissionStatus::ALL.len());
        assert_eq!(options[0], ("new".to_string(), "Mới".to_string()));
        assert_eq!(JobCategory::Electronics.label(), "Điện - Điện tử");
        assert_eq!(JobCategory::Electronics.to_string(), "electronics");
        assert!(JlptLevel::N3 == "N3");
    }

    #[test]
    fn test_labeled_enum_serializes_as_wire_value() {
        assert_eq!(serde_json::to_value(JobCategory::FoodProcessing).unwrap(), json!("food-processing"));
        let status: SubmissionStatus = serde_json::from_value(json!("replied")).unwrap();
        assert_eq!(status, SubmissionStatus::Replied);
    }

    #[test]
    fn test_job_deserializes_backend_shape() {
        let job: Job = serde_json::from_value(json!({
            "_id": "665f1c",
            "title": "Kỹ sư cơ khí",
            "category": "mechanical",
            "location": "Osaka",
            "salary": { "min": 18000000, "max": 25000000, "currency": "VND" },
            "recruitmentStatus": "paused",
            "isActive": true,
            "deadline": "2026-12-31",
            "createdAt": "2026-01-04T22:15:06Z",
            "unknownField": 42
        }))
        .unwrap();

        assert_eq!(job.id.as_deref(), Some("665f1c"));
        assert_eq!(job.category, JobCategory::Mechanical);
        assert_eq!(job.recruitment_status, RecruitmentStatus::Paused);
        assert_eq!(job.deadline, NaiveDate::from_ymd_opt(2026, 12, 31));
        assert!(job.created_at.is_some());
        assert!(job.requirements.is_empty());
        assert!(!job.is_open());
    }

    #[test]
    fn test_job_serializes_camel_case_without_timestamps() {
        let job = Job {
            id: Some("665f1c".to_string()),
            title: "Thợ hàn".to_string(),
            work_type: "Toàn thời gian".to_string(),
            created_at: Some(chrono::Utc::now()),
            ..Job::draft(0)
        };
        let value = serde_json::to_value(&job).unwrap();

        assert_eq!(value["workType"], json!("Toàn thời gian"));
        assert_eq!(value["isActive"], json!(true));
        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_none());
        assert!(value.get("work_type").is_none());
    }

    #[test]
    fn test_salary_display() {
        let salary = Salary {
            min: Some(18_000_000),
            max: Some(25_000_000),
            currency: "VND".to_string(),
            note: String::new(),
        };
        assert_eq!(salary.display(), "18,000,000 - 25,000,000 VND");

        let open = Salary {
            note: "Cạnh tranh".to_string(),
            ..Salary::default()
        };
        assert_eq!(open.display(), "Cạnh tranh");
        assert_eq!(Salary::default().display(), "Thỏa thuận");
    }

    #[test]
    fn test_age_range_display() {
        assert_eq!(AgeRange { min: Some(18), max: Some(35) }.display(), "18 - 35 tuổi");
        assert_eq!(AgeRange { min: None, max: Some(30) }.display(), "Dưới 30 tuổi");
        assert_eq!(AgeRange::default().display(), "Không giới hạn");
    }

    #[test]
    fn test_job_validate_fails_on_inverted_salary() {
        let job = Job {
            title: "Thợ hàn".to_string(),
            location: "Aichi".to_string(),
            salary: Salary {
                min: Some(30),
                max: Some(20),
                ..Salary::default()
            },
            ..Job::draft(0)
        };
        let err = job.validate(true, false).unwrap_err();
        assert_eq!(err.field, "salary");
    }

    #[test]
    fn test_job_validate_fails_on_missing_location() {
        let job = Job {
            title: "Thợ hàn".to_string(),
            ..Job::draft(0)
        };
        assert_eq!(job.validate(true, false).unwrap_err().field, "location");
    }

    #[test]
    fn test_job_renumber_drops_blank_lines() {
        let mut job = Job {
            requirements: vec!["JLPT N4".to_string(), "  ".to_string()],
            benefits: vec![String::new()],
            ..Job::default()
        };
        job.renumber();
        assert_eq!(job.requirements, vec!["JLPT N4".to_string()]);
        assert!(job.benefits.is_empty());
    }

    #[test]
    fn test_banner_validate_requires_image_for_new_items() {
        let banner = Banner {
            title: "Chào mừng".to_string(),
            ..Banner::draft(0)
        };
        assert_eq!(banner.validate(true, false).unwrap_err().field, "image");
        assert!(banner.validate(true, true).is_ok());
        assert!(banner.validate(false, false).is_ok());
    }

    #[test]
    fn test_banner_validate_fails_on_blank_title() {
        let banner = Banner {
            title: "   ".to_string(),
            image: "/uploads/a.png".to_string(),
            ..Banner::draft(0)
        };
        let err = banner.validate(false, false).unwrap_err();
        assert_eq!(err.message, "Vui lòng nhập tiêu đề banner!");
    }

    #[test]
    fn test_automation_renumbers_steps_before_validation() {
        let mut item = AutomationItem {
            title: "Cắt vải".to_string(),
            steps: vec![
                Step { title: "Trải vải".to_string(), order: 7, ..Step::default() },
                Step { title: "Cắt".to_string(), order: 2, ..Step::default() },
            ],
            ..AutomationItem::draft(0)
        };
        item.renumber();
        let orders: Vec<i32> = item.steps.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(item.steps[0].title, "Trải vải");
    }

    #[test]
    fn test_automation_validate_fails_on_untitled_step() {
        let item = AutomationItem {
            title: "Cắt vải".to_string(),
            image: "/uploads/cut.png".to_string(),
            steps: vec![Step::default()],
            ..AutomationItem::draft(0)
        };
        let err = item.validate(false, false).unwrap_err();
        assert_eq!(err.field, "steps");
        assert_eq!(err.message, "Vui lòng nhập tiêu đề cho bước 1!");
    }

    #[test]
    fn test_facility_draft_alternates_layout() {
        assert_eq!(FacilityFeature::draft(0).layout, Layout::Left);
        assert_eq!(FacilityFeature::draft(1).layout, Layout::Right);
        assert_eq!(FacilityFeature::draft(2).layout, Layout::Left);
    }

    #[test]
    fn test_stage_visible_machines_skips_inactive_and_sorts() {
        let stage = Stage {
            machines: vec![
                Machine { name: "Máy ép".to_string(), order: 2, ..Machine::default() },
                Machine { name: "Máy cũ".to_string(), order: 0, is_active: false, ..Machine::default() },
                Machine { name: "Máy cắt".to_string(), order: 1, ..Machine::default() },
            ],
            ..Stage::draft(0)
        };
        let names: Vec<&str> = stage.visible_machines().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Máy cắt", "Máy ép"]);
    }

    #[test]
    fn test_product_uses_main_image_upload_field() {
        assert_eq!(Product::UPLOAD_FIELD, "mainImage");
        assert_eq!(Candidate::UPLOAD_FIELD, "cv");
        assert_eq!(Banner::UPLOAD_FIELD, "image");
        assert_eq!(CoreValue::UPLOAD_FIELD, "icon");
    }

    #[test]
    fn test_candidate_validate_fails_on_bad_phone() {
        let candidate = Candidate {
            name: "Nguyễn Văn A".to_string(),
            email: "a@example.com".to_string(),
            phone: "abc".to_string(),
            ..Candidate::default()
        };
        assert_eq!(candidate.validate(true, false).unwrap_err().field, "phone");
    }

    #[test]
    fn test_contact_submission_validate_success() {
        let submission = ContactSubmission {
            name: "Trần B".to_string(),
            email: "b@example.com".to_string(),
            message: "Xin báo giá".to_string(),
            ..ContactSubmission::default()
        };
        assert!(submission.validate(true, false).is_ok());
    }

    #[test]
    fn test_email_config_disabled_skips_smtp_checks() {
        let config = EmailConfig::default();
        assert_eq!(config.smtp_port, 587);
        assert!(Singleton::validate(&config).is_ok());
    }

    #[test]
    fn test_email_config_enabled_requires_recipients() {
        let config = EmailConfig {
            enabled: true,
            smtp_host: "smtp.example.com".to_string(),
            from_email: "noreply@example.com".to_string(),
            ..EmailConfig::default()
        };
        assert_eq!(Singleton::validate(&config).unwrap_err().field, "recipients");
    }

    #[test]
    fn test_email_config_fails_on_invalid_recipient() {
        let config = EmailConfig {
            recipients: vec!["hr@example.com".to_string(), "not-an-email".to_string()],
            ..EmailConfig::default()
        };
        let err = Singleton::validate(&config).unwrap_err();
        assert!(err.message.contains("not-an-email"));
    }

    #[test]
    fn test_vision_mission_requires_both_texts() {
        let document = VisionMission {
            vision: "Dẫn đầu".to_string(),
            mission: String::new(),
        };
        assert_eq!(Singleton::validate(&document).unwrap_err().field, "mission");
    }
}
