mod common;

#[cfg(test)]
pub mod form_tests {
    use corpsite::admin::truncate;
    use corpsite::editor::listing::{filter_candidates, filter_jobs, matches_keyword};
    use corpsite::editor::ordering::{insert_at, move_within, neighbour, normalize, remove_at};
    use corpsite::editor::*;
    use corpsite::models::*;
    use corpsite::services::{Resource, Upload};

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        FormInput::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_form_input_text_trims_and_takes_last_value() {
        let form = input(&[("title", "  cũ "), ("title", "  Mới  ")]);
        assert_eq!(form.text("title"), "Mới");
        assert_eq!(form.text("missing"), "");
    }

    #[test]
    fn test_form_input_checkbox() {
        let form = input(&[("a", "on"), ("b", "TRUE"), ("c", "off")]);
        assert!(form.checkbox("a"));
        assert!(form.checkbox("b"));
        assert!(!form.checkbox("c"));
        assert!(!form.checkbox("unchecked"));
    }

    #[test]
    fn test_form_input_number_accepts_separators() {
        let form = input(&[("salary", "18.000.000"), ("blank", " ")]);
        assert_eq!(form.number::<i64>("salary", "bad").unwrap(), Some(18_000_000));
        assert_eq!(form.number::<i64>("blank", "bad").unwrap(), None);
    }

    #[test]
    fn test_form_input_number_fails_on_text() {
        let form = input(&[("salary", "nhiều")]);
        let err = form.number::<i64>("salary", "Vui lòng nhập số hợp lệ!").unwrap_err();
        assert_eq!(err.field, "salary");
    }

    #[test]
    fn test_form_input_lines_and_pairs() {
        let form = input(&[("steps", "Trải vải | Trên bàn dài\r\n\r\n  Cắt  \n")]);
        assert_eq!(form.lines("steps"), vec!["Trải vải | Trên bàn dài", "Cắt"]);
        assert_eq!(
            form.pairs("steps"),
            vec![
                ("Trải vải".to_string(), "Trên bàn dài".to_string()),
                ("Cắt".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_form_input_json_list_fails_on_malformed_json() {
        let form = input(&[("machines", "[{\"name\": ")]);
        let err = form.json_list::<Machine>("machines", "sai định dạng").unwrap_err();
        assert_eq!(err.message, "sai định dạng");
        assert!(input(&[]).json_list::<Machine>("machines", "x").unwrap().is_empty());
    }

    #[test]
    fn test_form_input_has_upload_ignores_empty_files() {
        let empty = FormInput::new().with_upload(Upload::new("a.png", "image/png", Vec::new()));
        assert!(!empty.has_upload());
        let file = FormInput::new().with_upload(Upload::new("a.png", "image/png", vec![1]));
        assert!(file.has_upload());
    }

    #[test]
    fn test_automation_apply_form_builds_ordered_steps() {
        let mut item = AutomationItem::draft(3);
        item.apply_form(&input(&[
            ("title", " Cắt vải "),
            ("steps", "Trải vải | Trên bàn\nCắt | Theo rập"),
        ]))
        .unwrap();

        assert_eq!(item.title, "Cắt vải");
        assert_eq!(item.order, 3);
        assert_eq!(item.steps.len(), 2);
        assert_eq!(item.steps[1].title, "Cắt");
        assert_eq!(item.steps[1].description, "Theo rập");
        assert_eq!(item.steps[1].order, 1);
    }

    #[test]
    fn test_job_apply_form_parses_typed_fields() {
        let mut job = Job::draft(0);
        job.apply_form(&input(&[
            ("title", "Kỹ sư"),
            ("category", "electronics"),
            ("location", "Tokyo"),
            ("requirements", "N3\nKinh nghiệm 2 năm"),
            ("salaryMin", "20,000,000"),
            ("ageMax", "35"),
            ("deadline", "2026-11-30"),
            ("recruitmentStatus", "closed"),
        ]))
        .unwrap();

        assert_eq!(job.category, JobCategory::Electronics);
        assert_eq!(job.requirements.len(), 2);
        assert_eq!(job.salary.min, Some(20_000_000));
        assert_eq!(job.age.max, Some(35));
        assert_eq!(job.deadline.map(|d| d.to_string()).as_deref(), Some("2026-11-30"));
        assert_eq!(job.recruitment_status, RecruitmentStatus::Closed);
        assert!(!job.is_active);
    }

    #[test]
    fn test_stage_apply_form_fails_on_bad_machine_json() {
        let mut stage = Stage::draft(0);
        let err = stage
            .apply_form(&input(&[("title", "Ép"), ("machines", "not json")]))
            .unwrap_err();
        assert_eq!(err.field, "machines");
    }

    #[test]
    fn test_stage_apply_form_reads_machine_json() {
        let mut stage = Stage::draft(0);
        stage
            .apply_form(&input(&[
                ("title", "Ép"),
                ("machines", r#"[{"name": "Máy ép 200T", "images": [{"url": "/m.png"}]}]"#),
            ]))
            .unwrap();
        assert_eq!(stage.machines[0].name, "Máy ép 200T");
        assert!(stage.machines[0].is_active);
        assert_eq!(stage.machines[0].images[0].url, "/m.png");
    }

    #[test]
    fn test_email_config_blank_password_keeps_existing() {
        let mut config = EmailConfig {
            password: "secret".to_string(),
            ..EmailConfig::default()
        };
        config
            .apply_form(&input(&[("smtpHost", "smtp.example.com"), ("password", "")]))
            .unwrap();
        assert_eq!(config.password, "secret");
        assert_eq!(config.smtp_port, 587);

        config.apply_form(&input(&[("password", "moi")])).unwrap();
        assert_eq!(config.password, "moi");
    }

    #[test]
    fn test_fields_mirror_record_values() {
        let banner = Banner {
            title: "Chào mừng".to_string(),
            is_active: true,
            ..Banner::default()
        };
        let fields = banner.fields();
        let title = fields.iter().find(|f| f.name == "title").unwrap();
        assert_eq!(title.value, "Chào mừng");
        assert!(title.required);
        assert!(fields.iter().find(|f| f.name == "isActive").unwrap().is_checked());
    }

    #[test]
    fn test_listable_default_matches_searches_cells() {
        let banner = Banner {
            title: "Tuyển sinh mùa thu".to_string(),
            ..Banner::default()
        };
        let hit = ListQuery { q: Some("MÙA thu".to_string()), ..ListQuery::default() };
        let miss = ListQuery { q: Some("xuân".to_string()), ..ListQuery::default() };
        assert!(banner.matches(&hit));
        assert!(!banner.matches(&miss));
        assert!(banner.matches(&ListQuery::default()));
        assert!(Banner::filters(&hit).is_empty());
    }

    #[test]
    fn test_candidate_filters_render_selected_values() {
        let query = ListQuery { major: Some("automation".to_string()), ..ListQuery::default() };
        let filters = Candidate::filters(&query);
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0].value, "all");
        assert_eq!(filters[1].value, "automation");
    }

    #[test]
    fn test_matches_keyword_requires_every_term() {
        assert!(matches_keyword(&["Kỹ sư cơ khí", "Osaka"], "cơ khí osaka"));
        assert!(!matches_keyword(&["Kỹ sư cơ khí", "Osaka"], "cơ khí tokyo"));
    }

    fn job(title: &str, category: JobCategory, open: bool) -> Job {
        Job {
            title: title.to_string(),
            category,
            location: "Nhật Bản".to_string(),
            is_active: open,
            ..Job::draft(0)
        }
    }

    #[test]
    fn test_filter_jobs_public_hides_closed() {
        let jobs = vec![
            job("Thợ hàn", JobCategory::Mechanical, true),
            job("Thợ tiện", JobCategory::Mechanical, false),
            job("Điều dưỡng", JobCategory::Nursing, true),
        ];

        let query = ListQuery { category: Some("mechanical".to_string()), ..ListQuery::default() };
        let public = filter_jobs(jobs.clone(), &query, true);
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].title, "Thợ hàn");

        assert_eq!(filter_jobs(jobs.clone(), &query, false).len(), 2);

        let all = ListQuery { category: Some("all".to_string()), ..ListQuery::default() };
        assert_eq!(filter_jobs(jobs, &all, true).len(), 2);
    }

    #[test]
    fn test_filter_candidates_by_status_and_keyword() {
        let candidates = vec![
            Candidate {
                name: "Nguyễn An".to_string(),
                status: CandidateStatus::Hired,
                ..Candidate::default()
            },
            Candidate {
                name: "Lê Bình".to_string(),
                ..Candidate::default()
            },
        ];
        let query = ListQuery {
            status: Some("hired".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(filter_candidates(candidates.clone(), &query).len(), 1);

        let query = ListQuery { q: Some("bình".to_string()), ..ListQuery::default() };
        assert_eq!(filter_candidates(candidates, &query)[0].name, "Lê Bình");
    }

    #[test]
    fn test_paginate_clamps_out_of_range_page() {
        let page = paginate((1..=20).collect::<Vec<_>>(), 9, 9);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![19, 20]);
        assert!(page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_paginate_empty_collection_has_one_page() {
        let page = paginate(Vec::<i32>::new(), 0, 9);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_list_query_without_page() {
        let query = ListQuery {
            q: Some("kỹ sư".to_string()),
            category: Some(" ".to_string()),
            page: Some(4),
            ..ListQuery::default()
        };
        assert_eq!(query.without_page(), "q=k%E1%BB%B9+s%C6%B0");
        assert_eq!(query.page(), 4);
        assert_eq!(ListQuery::default().page(), 1);
    }

    #[test]
    fn test_normalize_sorts_and_closes_gaps() {
        let mut banners: Vec<Banner> = [5, 1, 9]
            .into_iter()
            .map(|order| Banner { title: order.to_string(), order, ..Banner::default() })
            .collect();
        normalize(&mut banners);

        let titles: Vec<&str> = banners.iter().map(|b| b.title.as_str()).collect();
        let orders: Vec<i32> = banners.iter().map(|b| b.order).collect();
        assert_eq!(titles, vec!["1", "5", "9"]);
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_neighbour_at_edges() {
        assert_eq!(neighbour(3, 0, Direction::Up), None);
        assert_eq!(neighbour(3, 2, Direction::Down), None);
        assert_eq!(neighbour(3, 1, Direction::Up), Some(0));
        assert_eq!(neighbour(3, 1, Direction::Down), Some(2));
    }

    #[test]
    fn test_nested_list_edits_keep_orders_contiguous() {
        let set = |s: &mut Step, i: i32| s.order = i;
        let mut steps: Vec<Step> = ["a", "b", "c"]
            .into_iter()
            .map(|t| Step { title: t.to_string(), ..Step::default() })
            .collect();

        insert_at(&mut steps, 1, Step { title: "x".to_string(), ..Step::default() }, set);
        assert!(move_within(&mut steps, 0, Direction::Down, set));
        assert!(!move_within(&mut steps, 3, Direction::Down, set));
        let removed = remove_at(&mut steps, 2, set).unwrap();

        assert_eq!(removed.title, "b");
        let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
        let orders: Vec<i32> = steps.iter().map(|s| s.order).collect();
        assert_eq!(titles, vec!["x", "a", "c"]);
        assert_eq!(orders, vec![0, 1, 2]);
        assert!(remove_at(&mut steps, 10, set).is_none());
    }

    #[test]
    fn test_toast_query_string_round_trip() {
        let toast = Toast::success("Thêm mới thành công!");
        let query = toast.query_string();
        assert!(query.starts_with("toast=success&msg="));

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&query).unwrap();
        let parsed = Toast::from_query(Some(&pairs[0].1), Some(&pairs[1].1)).unwrap();
        assert_eq!(parsed, toast);
    }

    #[test]
    fn test_toast_from_query_fails_on_unknown_level() {
        assert!(Toast::from_query(Some("warning"), Some("x")).is_none());
        assert!(Toast::from_query(Some("error"), Some("  ")).is_none());
        assert!(Toast::from_query(None, Some("x")).is_none());
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate("Điều dưỡng viên", 6), "Điều d…");
        assert_eq!(truncate("ngắn", 10), "ngắn");
    }
}
