//! Resolver behavior over the mock transport.

use std::sync::Arc;

use serde_json::{json, Value};

use newsroom::avatar::DEFAULT_AVATAR_URL;
use newsroom::testing::{MockReply, MockTransport};
use newsroom::types::homepage::FeaturedContentMode;
use newsroom::{CachePolicy, NewsroomClient, SiteConfig};

fn client(mock: &Arc<MockTransport>) -> NewsroomClient {
    // Degrade paths log via tracing; RUST_LOG makes them visible when a
    // test needs debugging.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let config = SiteConfig::new("https://cms.example.org/graphql", None);
    NewsroomClient::with_transport(mock.clone(), config)
}

fn post_json(id: &str, slug: &str, date: &str) -> Value {
    json!({
        "id": id,
        "databaseId": 1,
        "title": format!("Judul {slug}"),
        "slug": slug,
        "date": date,
        "excerpt": "<p>Ringkasan</p>"
    })
}

mod posts {
    use super::*;

    #[tokio::test]
    async fn latest_is_sorted_date_descending() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "LatestPosts",
            json!({ "posts": { "nodes": [
                post_json("a", "lama", "2024-01-01T00:00:00"),
                post_json("b", "baru", "2024-06-01T00:00:00"),
                post_json("c", "tengah", "2024-03-01T00:00:00"),
            ] } }),
        );

        let items = client(&mock).posts().latest(10).await.unwrap();
        let slugs: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["baru", "tengah", "lama"]);
    }

    #[tokio::test]
    async fn by_slug_returns_none_for_unknown() {
        let mock = Arc::new(MockTransport::new());
        mock.on("PostBySlug", json!({ "post": null }));

        let item = client(&mock).posts().by_slug("tidak-ada").await.unwrap();
        assert!(item.is_none());
    }

    #[tokio::test]
    async fn by_slugs_preserves_requested_order() {
        let mock = Arc::new(MockTransport::new());
        // The API returns its own (here: date) ordering.
        mock.on(
            "PostsBySlugs",
            json!({ "posts": { "nodes": [
                post_json("a", "alpha", "2024-06-01T00:00:00"),
                post_json("b", "beta", "2024-05-01T00:00:00"),
                post_json("c", "gamma", "2024-04-01T00:00:00"),
            ] } }),
        );

        let requested = vec![
            "gamma".to_string(),
            "hilang".to_string(),
            "alpha".to_string(),
        ];
        let items = client(&mock).posts().by_slugs(&requested).await.unwrap();
        let slugs: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["gamma", "alpha"]);
    }

    #[tokio::test]
    async fn by_slugs_empty_input_skips_fetch() {
        let mock = Arc::new(MockTransport::new());
        let items = client(&mock).posts().by_slugs(&[]).await.unwrap();
        assert!(items.is_empty());
        assert!(!mock.was_called("PostsBySlugs"));
    }

    #[tokio::test]
    async fn search_bypasses_cache() {
        let mock = Arc::new(MockTransport::new());
        mock.on("SearchPosts", json!({ "posts": { "nodes": [] } }));

        client(&mock).posts().search("maiyah", 10).await.unwrap();
        let call = mock
            .calls()
            .into_iter()
            .find(|c| c.query.contains("SearchPosts"))
            .unwrap();
        assert_eq!(call.cache, CachePolicy::NoCache);
    }

    #[tokio::test]
    async fn related_excludes_source_post_and_truncates() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "PostsByCategory",
            json!({ "posts": { "nodes": [
                post_json("a", "sumber", "2024-06-01T00:00:00"),
                post_json("b", "satu", "2024-05-01T00:00:00"),
                post_json("c", "dua", "2024-04-01T00:00:00"),
                post_json("d", "tiga", "2024-03-01T00:00:00"),
            ] } }),
        );

        let items = client(&mock)
            .posts()
            .related("berita", "sumber", 2)
            .await
            .unwrap();
        let slugs: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["satu", "dua"]);
    }

    #[tokio::test]
    async fn by_author_excludes_the_post_being_read() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "PostsByAuthor",
            json!({ "posts": { "nodes": [
                { "id": "a", "databaseId": 11, "slug": "sedang-dibaca", "date": "2024-06-01T00:00:00" },
                { "id": "b", "databaseId": 12, "slug": "lain-satu", "date": "2024-05-01T00:00:00" },
                { "id": "c", "databaseId": 13, "slug": "lain-dua", "date": "2024-04-01T00:00:00" },
                { "id": "d", "databaseId": 14, "slug": "lain-tiga", "date": "2024-03-01T00:00:00" },
            ] } }),
        );

        let items = client(&mock)
            .posts()
            .by_author(7, Some(11), 3)
            .await
            .unwrap();
        let slugs: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["lain-satu", "lain-dua", "lain-tiga"]);
    }

    #[tokio::test]
    async fn category_with_posts_merges_category_and_listing() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "CategoryWithPosts",
            json!({ "category": {
                "name": "Berita",
                "slug": "berita",
                "description": "Kabar terbaru",
                "posts": { "nodes": [
                    post_json("a", "lama", "2024-01-01T00:00:00"),
                    post_json("b", "baru", "2024-05-01T00:00:00"),
                ] }
            } }),
        );

        let archive = client(&mock)
            .posts()
            .category_with_posts("berita", 10)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(archive.category.name, "Berita");
        assert_eq!(archive.posts[0].slug, "baru");
    }

    #[tokio::test]
    async fn category_with_posts_unknown_slug_is_none() {
        let mock = Arc::new(MockTransport::new());
        mock.on("CategoryWithPosts", json!({ "category": null }));
        assert!(client(&mock)
            .posts()
            .category_with_posts("tidak-ada", 10)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(
            "LatestPosts",
            MockReply::Transport {
                status: 502,
                body: "bad gateway".to_string(),
            },
        );

        let err = client(&mock).posts().latest(5).await.unwrap_err();
        assert_eq!(err.status(), Some(502));
    }
}

mod homepage {
    use super::*;

    fn homepage_document(mode: &str, featured: Vec<Value>) -> Value {
        json!({
            "posts": { "nodes": [
                post_json("l1", "satu", "2024-06-06T00:00:00"),
                post_json("l2", "dua", "2024-06-05T00:00:00"),
                post_json("l3", "tiga", "2024-06-04T00:00:00"),
                post_json("l4", "empat", "2024-06-03T00:00:00"),
                post_json("l5", "lima", "2024-06-02T00:00:00"),
                post_json("l6", "enam", "2024-06-01T00:00:00"),
            ] },
            "maiyahOptionsData": { "maiyahGlobalSettings": { "homepageSettings": {
                "featuredContentMode": mode,
                "sectionTitleCeklis": "Pilihan Redaksi",
                "featuredPosts": { "nodes": featured },
                "ceklisAds": [
                    { "gambar": { "node": { "sourceUrl": "https://asset.mymaiyah.id/iklan.png" } }, "url": "https://example.org" }
                ]
            } } }
        })
    }

    #[tokio::test]
    async fn manual_mode_keeps_curated_order() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "HomepageDocument",
            homepage_document(
                "manual",
                vec![
                    post_json("f1", "pilihan-lama", "2023-01-01T00:00:00"),
                    post_json("f2", "pilihan-baru", "2024-01-01T00:00:00"),
                ],
            ),
        );
        mock.on("PopularPosts", json!({ "wppPopularPosts": [] }));

        let composition = client(&mock).homepage().compose().await;
        assert_eq!(composition.mode, FeaturedContentMode::Manual);
        // Curated order survives even against date ordering.
        let featured: Vec<&str> = composition
            .featured_posts
            .iter()
            .map(|i| i.slug.as_str())
            .collect();
        assert_eq!(featured, vec!["pilihan-lama", "pilihan-baru"]);
        assert_eq!(composition.grid_offset(), 0);
        assert_eq!(composition.section_titles.ceklis, "Pilihan Redaksi");
        assert_eq!(
            composition.ads[0].image_url.as_deref(),
            Some("https://assets.mymaiyah.id/iklan.png")
        );
    }

    #[tokio::test]
    async fn latest_mode_features_newest_and_offsets_grid() {
        let mock = Arc::new(MockTransport::new());
        mock.on("HomepageDocument", homepage_document("latest", vec![]));
        mock.on("PopularPosts", json!({ "wppPopularPosts": [] }));

        let composition = client(&mock).homepage().compose().await;
        assert_eq!(composition.mode, FeaturedContentMode::Latest);
        assert_eq!(composition.featured_posts.len(), 3);
        assert_eq!(composition.grid_offset(), 3);
        // The latest grid never repeats a featured item.
        let featured_ids: Vec<&str> = composition
            .featured_posts
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        for item in composition.latest_grid() {
            assert!(!featured_ids.contains(&item.id.as_str()));
        }
    }

    #[tokio::test]
    async fn popular_mode_features_the_whole_ranking_by_date() {
        let mock = Arc::new(MockTransport::new());
        mock.on("HomepageDocument", homepage_document("popular", vec![]));
        // The plugin ranks by views; display order is still recency.
        mock.on(
            "PopularPosts",
            json!({ "wppPopularPosts": [
                post_json("p1", "terpopuler", "2024-02-01T00:00:00"),
                post_json("p2", "kedua", "2024-05-01T00:00:00"),
                post_json("p3", "ketiga", "2024-03-01T00:00:00"),
                post_json("p4", "keempat", "2024-01-01T00:00:00"),
            ] }),
        );

        let composition = client(&mock).homepage().compose().await;
        assert_eq!(composition.mode, FeaturedContentMode::Popular);
        let featured: Vec<&str> = composition
            .featured_posts
            .iter()
            .map(|i| i.slug.as_str())
            .collect();
        // Nothing from the ranking is dropped.
        assert_eq!(featured, vec!["kedua", "ketiga", "terpopuler", "keempat"]);
    }

    #[tokio::test]
    async fn popular_fetch_failure_only_empties_featured() {
        let mock = Arc::new(MockTransport::new());
        mock.on("HomepageDocument", homepage_document("popular", vec![]));
        mock.reply(
            "PopularPosts",
            MockReply::GraphQl("plugin disabled".to_string()),
        );

        let composition = client(&mock).homepage().compose().await;
        assert!(composition.featured_posts.is_empty());
        assert_eq!(composition.latest_posts.len(), 6);
    }

    #[tokio::test]
    async fn total_failure_degrades_to_default() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(
            "HomepageDocument",
            MockReply::Transport {
                status: 500,
                body: "down".to_string(),
            },
        );
        mock.on("PopularPosts", json!({ "wppPopularPosts": [] }));

        let composition = client(&mock).homepage().compose().await;
        assert!(composition.featured_posts.is_empty());
        assert!(composition.latest_posts.is_empty());
        assert_eq!(composition.section_titles.latest, "Berita Terbaru");
    }
}

mod navigation {
    use super::*;

    #[tokio::test]
    async fn structured_menus_win() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "GlobalNavigation",
            json!({ "maiyahOptionsData": { "maiyahGlobalSettings": { "globalNavigationManager": {
                "desktopMenuItems": [ { "label": "Berita", "url": "/berita/" } ],
                "pillMenuItems": [ { "label": "Esai", "url": "/esai/" } ]
            } } } }),
        );

        let menus = client(&mock).navigation().menus().await.unwrap();
        assert_eq!(menus.desktop[0].label, "Berita");
        assert_eq!(menus.pills[0].label, "Esai");
        assert!(!mock.was_called("LegacyMainMenu"));
    }

    #[tokio::test]
    async fn empty_structured_menus_fall_back_to_legacy_flat() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "GlobalNavigation",
            json!({ "maiyahOptionsData": { "maiyahGlobalSettings": { "globalNavigationManager": {} } } }),
        );
        mock.on(
            "LegacyMainMenu",
            json!({ "maiyahOptionsData": { "maiyahGlobalSettings": { "mainMenuManager": {
                "mainMenuItems": [
                    { "label": "Berita", "url": "/berita/" },
                    { "label": "Agenda", "url": "/agenda/" }
                ]
            } } } }),
        );

        let menus = client(&mock).navigation().menus().await.unwrap();
        // The flat list backs every surface.
        assert_eq!(menus.desktop.len(), 2);
        assert_eq!(menus.mobile_drawer.len(), 2);
        assert_eq!(menus.pills.len(), 2);
    }

    #[tokio::test]
    async fn both_sources_empty_yields_none() {
        let mock = Arc::new(MockTransport::new());
        mock.on("GlobalNavigation", json!({ "maiyahOptionsData": null }));
        mock.on("LegacyMainMenu", json!({ "maiyahOptionsData": null }));

        assert!(client(&mock).navigation().menus().await.is_none());
    }

    #[tokio::test]
    async fn structured_fetch_failure_still_tries_legacy() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(
            "GlobalNavigation",
            MockReply::Transport {
                status: 500,
                body: "down".to_string(),
            },
        );
        mock.on(
            "LegacyMainMenu",
            json!({ "maiyahOptionsData": { "maiyahGlobalSettings": { "mainMenuManager": {
                "mainMenuItems": [ { "label": "Berita", "url": "/berita/" } ]
            } } } }),
        );

        let menus = client(&mock).navigation().menus().await.unwrap();
        assert_eq!(menus.desktop[0].label, "Berita");
    }

    #[tokio::test]
    async fn legacy_fetch_failure_degrades_to_none() {
        let mock = Arc::new(MockTransport::new());
        mock.on("GlobalNavigation", json!({ "maiyahOptionsData": null }));
        mock.reply(
            "LegacyMainMenu",
            MockReply::GraphQl("field removed".to_string()),
        );

        assert!(client(&mock).navigation().menus().await.is_none());
    }
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn uri_is_canonicalized_before_fetch() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "PageByUri",
            json!({ "page": { "id": "x", "title": "Tentang", "slug": "tentang", "status": "publish" } }),
        );

        let page = client(&mock).pages().by_uri("tentang").await.unwrap();
        assert_eq!(page.unwrap().title, "Tentang");

        let call = mock.calls().into_iter().next().unwrap();
        assert_eq!(call.variables["uri"], json!("/tentang/"));
    }

    #[tokio::test]
    async fn unpublished_page_resolves_to_none() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "PageByUri",
            json!({ "page": { "id": "x", "title": "Draf", "slug": "draf", "status": "draft" } }),
        );

        assert!(client(&mock).pages().by_uri("/draf/").await.unwrap().is_none());
    }
}

mod contributors {
    use super::*;

    fn user_json(id: i64, name: &str, slug: &str, extra: Value) -> Value {
        let mut user = json!({
            "id": format!("dXNlcjo{id}"),
            "databaseId": id,
            "name": name,
            "slug": slug,
            "posts": { "nodes": [ { "id": "p1" } ] }
        });
        if let (Some(base), Some(extra)) = (user.as_object_mut(), extra.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        user
    }

    #[tokio::test]
    async fn profile_photo_short_circuits_all_other_sources() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [ user_json(501, "Penulis Baru", "penulis-baru", json!({
                "authorProfile": { "profilePhoto": { "node": { "sourceUrl": "https://assets.mymaiyah.id/p.jpg" } } }
            })) ] } }),
        );
        mock.on_html_error("kontributor");

        let directory = client(&mock).contributors().directory().await.unwrap();
        assert_eq!(directory[0].avatar_url, "https://assets.mymaiyah.id/p.jpg");
        assert!(!mock.was_called("AvatarMediaSearch"));
        assert_eq!(mock.html_fetch_count("/author/"), 0);
    }

    #[tokio::test]
    async fn bundled_legacy_export_resolves_by_slug() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [
                user_json(501, "Kadir Wahid", "abdul-kadir-wahid", json!({}))
            ] } }),
        );
        mock.on_html_error("kontributor");

        let directory = client(&mock).contributors().directory().await.unwrap();
        assert_eq!(
            directory[0].avatar_url,
            "https://assets.mymaiyah.id/wp-content/uploads/contributors/kadir-wahid.jpg"
        );
        assert!(!mock.was_called("AvatarMediaSearch"));
    }

    #[tokio::test]
    async fn bundled_export_wins_over_live_directory_page() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [
                user_json(12, "Kadir Wahid", "abdul-kadir-wahid", json!({}))
            ] } }),
        );
        // The live page disagrees with the bundled export for the same
        // contributor; the bundled entry is authoritative.
        mock.on_html(
            "kontributor",
            r#"<div id="about-author-12" data-slug="abdul-kadir-wahid">
                 <img src="https://assets.mymaiyah.id/uploads/terbaru.jpg"></div>"#,
        );

        let directory = client(&mock).contributors().directory().await.unwrap();
        assert_eq!(
            directory[0].avatar_url,
            "https://assets.mymaiyah.id/wp-content/uploads/contributors/kadir-wahid.jpg"
        );
    }

    #[tokio::test]
    async fn live_directory_page_fills_gaps_in_bundled_export() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [
                user_json(501, "Orang Baru", "orang-baru", json!({}))
            ] } }),
        );
        // Not in the bundled export; only the live page knows them.
        mock.on_html(
            "kontributor",
            r#"<div id="about-author-501" data-slug="orang-baru">
                 <img src="https://assets.mymaiyah.id/uploads/orang-baru.jpg"></div>"#,
        );

        let directory = client(&mock).contributors().directory().await.unwrap();
        assert_eq!(
            directory[0].avatar_url,
            "https://assets.mymaiyah.id/uploads/orang-baru.jpg"
        );
        assert!(!mock.was_called("AvatarMediaSearch"));
    }

    #[tokio::test]
    async fn fuzzy_media_search_resolves_unknown_contributor() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [
                user_json(501, "Ratna Dewi", "ratna-dewi", json!({}))
            ] } }),
        );
        mock.on_html_error("kontributor");
        mock.on(
            "AvatarMediaSearch",
            json!({ "mediaItems": { "nodes": [
                { "sourceUrl": "https://assets.mymaiyah.id/u/banner-acara.jpg", "slug": "banner-acara", "title": null },
                { "sourceUrl": "https://asset.mymaiyah.id/u/foto-ratna-dewi.jpg", "slug": "foto-ratna-dewi", "title": "Foto Ratna Dewi" }
            ] } }),
        );
        mock.on_html_error("/author/");

        let directory = client(&mock).contributors().directory().await.unwrap();
        // Match found, and the typo'd host rewritten on the way out.
        assert_eq!(
            directory[0].avatar_url,
            "https://assets.mymaiyah.id/u/foto-ratna-dewi.jpg"
        );
        assert!(mock.was_called("AvatarMediaSearch"));
    }

    #[tokio::test]
    async fn author_page_is_fetched_only_as_last_resort() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [
                user_json(501, "Tanpa Jejak", "tanpa-jejak", json!({}))
            ] } }),
        );
        mock.on_html_error("kontributor");
        mock.on("AvatarMediaSearch", json!({ "mediaItems": { "nodes": [] } }));
        mock.on_html(
            "/author/tanpa-jejak/",
            r#"<img class="wp-user-avatar" src="https://assets.mymaiyah.id/u/jejak.jpg">"#,
        );

        let directory = client(&mock).contributors().directory().await.unwrap();
        assert_eq!(
            directory[0].avatar_url,
            "https://assets.mymaiyah.id/u/jejak.jpg"
        );
        assert_eq!(mock.html_fetch_count("/author/tanpa-jejak/"), 1);
    }

    #[tokio::test]
    async fn gravatar_fallback_yields_default_asset() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [ user_json(501, "Tanpa Foto", "tanpa-foto", json!({
                "avatar": { "url": "https://secure.gravatar.com/avatar/ff?d=wp_user_avatar" }
            })) ] } }),
        );
        mock.on_html_error("kontributor");
        mock.on("AvatarMediaSearch", json!({ "mediaItems": { "nodes": [] } }));
        mock.on_html_error("/author/");

        let directory = client(&mock).contributors().directory().await.unwrap();
        assert_eq!(directory[0].avatar_url, DEFAULT_AVATAR_URL);
    }

    #[tokio::test]
    async fn directory_filters_postless_users_and_sorts_by_name() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Contributors",
            json!({ "users": { "nodes": [
                user_json(501, "Zainal", "zainal", json!({
                    "authorProfile": { "profilePhoto": { "node": { "sourceUrl": "https://assets.mymaiyah.id/z.jpg" } } }
                })),
                {
                    "id": "dXNlcjo502", "databaseId": 502, "name": "Tanpa Tulisan",
                    "slug": "tanpa-tulisan", "posts": { "nodes": [] }
                },
                user_json(503, "Aminah", "aminah", json!({
                    "authorProfile": { "profilePhoto": { "node": { "sourceUrl": "https://assets.mymaiyah.id/a.jpg" } } }
                })),
            ] } }),
        );
        mock.on_html_error("kontributor");

        let directory = client(&mock).contributors().directory().await.unwrap();
        let names: Vec<&str> = directory.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Aminah", "Zainal"]);
    }

    #[tokio::test]
    async fn archive_returns_posts_and_resolved_avatar() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "ContributorArchive",
            json!({ "user": {
                "id": "dXNlcjo501", "databaseId": 501, "name": "Zainal", "slug": "zainal",
                "authorProfile": { "profilePhoto": { "node": { "sourceUrl": "https://assets.mymaiyah.id/z.jpg" } } },
                "posts": { "nodes": [ { "id": "p1" }, { "id": "p2" } ] },
                "archivePosts": { "nodes": [
                    post_json("p1", "lama", "2024-01-01T00:00:00"),
                    post_json("p2", "baru", "2024-05-01T00:00:00")
                ] }
            } }),
        );
        mock.on_html_error("kontributor");

        let archive = client(&mock)
            .contributors()
            .archive("zainal")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(archive.contributor.avatar_url, "https://assets.mymaiyah.id/z.jpg");
        assert_eq!(archive.contributor.post_count, 2);
        assert_eq!(archive.posts[0].slug, "baru");
    }

    #[tokio::test]
    async fn archive_unknown_slug_is_none() {
        let mock = Arc::new(MockTransport::new());
        mock.on("ContributorArchive", json!({ "user": null }));

        assert!(client(&mock)
            .contributors()
            .archive("tidak-ada")
            .await
            .unwrap()
            .is_none());
    }
}

mod agenda {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn agenda_json(id: &str, slug: &str, date: &str) -> Value {
        json!({
            "id": id,
            "title": format!("Acara {slug}"),
            "slug": slug,
            "agendaDetails": { "tanggalEvent": date, "lokasi": "Yogyakarta", "jenisAcara": "Rutinan" }
        })
    }

    #[tokio::test]
    async fn list_is_sorted_newest_event_first() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Agendas",
            json!({ "agendas": { "nodes": [
                agenda_json("a", "lama", "2025-01-10"),
                agenda_json("b", "baru", "2025-07-10"),
                agenda_json("c", "rusak", "segera"),
            ] } }),
        );

        let events = client(&mock).agenda().list(10).await.unwrap();
        let slugs: Vec<&str> = events.iter().map(|e| e.slug.as_str()).collect();
        // Unparseable dates sort last.
        assert_eq!(slugs, vec!["baru", "lama", "rusak"]);
    }

    #[tokio::test]
    async fn upcoming_filters_past_events_soonest_first() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "query Agendas",
            json!({ "agendas": { "nodes": [
                agenda_json("a", "lewat", "2025-01-10"),
                agenda_json("b", "jauh", "2025-12-10"),
                agenda_json("c", "dekat", "2025-09-10"),
            ] } }),
        );

        let now = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        let events = client(&mock).agenda().upcoming(10, now).await.unwrap();
        let slugs: Vec<&str> = events.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["dekat", "jauh"]);
    }

    #[tokio::test]
    async fn by_slug_unknown_is_none() {
        let mock = Arc::new(MockTransport::new());
        mock.on("AgendaBySlug", json!({ "agenda": null }));
        assert!(client(&mock).agenda().by_slug("x").await.unwrap().is_none());
    }
}

mod site {
    use super::*;

    #[tokio::test]
    async fn footer_fetch_failure_degrades_to_none() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(
            "FooterSettings",
            MockReply::Transport {
                status: 500,
                body: "down".to_string(),
            },
        );

        assert!(client(&mock).site().footer().await.is_none());
    }

    #[tokio::test]
    async fn footer_resolves_when_configured() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "FooterSettings",
            json!({ "maiyahOptionsData": { "maiyahGlobalSettings": { "footerManager": {
                "footerCopyright": "© 2026",
                "footerSocials": [ { "platform": "instagram", "url": "https://instagram.com/x" } ]
            } } } }),
        );

        let footer = client(&mock).site().footer().await.unwrap();
        assert_eq!(footer.copyright.as_deref(), Some("© 2026"));
        assert_eq!(footer.socials.len(), 1);
    }

    #[tokio::test]
    async fn blank_theme_css_is_none() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            "ThemeCustomization",
            json!({ "maiyahOptionsData": { "maiyahGlobalSettings": { "themeCustomization": {
                "customCss": "   "
            } } } }),
        );

        assert!(client(&mock).site().theme_css().await.is_none());
    }
}
