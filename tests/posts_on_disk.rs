use std::fs;
use std::path::Path;

use netrun_blog::content::{self, NewPost, PostRepository};
use netrun_blog::store::{FsStore, PostStore};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn dated(title: &str, date: &str) -> String {
    format!("---\ntitle: {}\ndate: {}\n---\n{} body\n", title, date, title)
}

#[test]
fn list_posts_sorts_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", &dated("January", "2024-01-01"));
    write(dir.path(), "b.md", &dated("March", "2024-03-01"));
    write(dir.path(), "c.md", &dated("February", "2024-02-01"));

    let dates: Vec<String> = content::list_posts(dir.path())
        .iter()
        .map(|p| p.date_string())
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[test]
fn list_posts_skips_invalid_and_other_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "valid.md", &dated("Valid", "2024-01-01"));
    write(dir.path(), "invalid.md", "# No front matter\n");
    write(dir.path(), "notes.txt", &dated("Text", "2024-01-01"));
    fs::write(dir.path().join("latin1.md"), b"---\ntitle: caf\xe9\n---\n").unwrap();
    fs::create_dir(dir.path().join("nested.md")).unwrap();
    write(&dir.path().join("nested.md"), "inner.md", &dated("Inner", "2024-01-01"));

    let posts = content::list_posts(dir.path());
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Valid");
}

#[cfg(unix)]
#[test]
fn dangling_symlink_does_not_hide_other_posts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.md", &dated("Good", "2024-01-01"));
    std::os::unix::fs::symlink(dir.path().join("missing.md"), dir.path().join("broken.md"))
        .unwrap();

    let posts = content::list_posts(dir.path());
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Good");
    assert!(content::get_post(dir.path(), "good").is_some());
    assert_eq!(FsStore::new(dir.path()).list().unwrap(), vec!["good.md"]);
}

#[test]
fn missing_directory_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("blog_posts");

    assert!(content::list_posts(&missing).is_empty());
    assert!(content::get_post(&missing, "anything").is_none());
    assert!(FsStore::new(&missing).list().unwrap().is_empty());
}

#[test]
fn get_post_by_explicit_and_derived_slug() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "welcome.md",
        "---\ntitle: Welcome to Netrun Systems\ndate: 2025-04-24\n---\nHi\n",
    );
    write(
        dir.path(),
        "custom.md",
        "---\ntitle: Something Else\nslug: custom-slug\n---\nHi\n",
    );

    let welcome = content::get_post(dir.path(), "welcome-to-netrun-systems").unwrap();
    assert_eq!(welcome.formatted_date(), "April 24, 2025");
    assert_eq!(
        content::get_post(dir.path(), "custom-slug").unwrap().title,
        "Something Else"
    );
    assert!(content::get_post(dir.path(), "nonexistent-slug").is_none());
}

#[test]
fn undated_post_defaults_to_now() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "undated.md", "---\ntitle: Undated\n---\n");

    let before = chrono::Local::now().naive_local();
    let post = content::get_post(dir.path(), "undated").unwrap();
    let after = chrono::Local::now().naive_local();

    assert!(post.date >= before && post.date <= after);
}

#[test]
fn created_post_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let posts_dir = dir.path().join("blog_posts");
    let repo = PostRepository::open(&posts_dir);

    let created = repo
        .create_post(&NewPost {
            title: "Cost Optimizer Launch".to_string(),
            author: "Netrun Systems".to_string(),
            date: "2024-11-05".to_string(),
            excerpt: "Cutting Azure spend".to_string(),
            image: None,
            body: "## Highlights\n\n- Budgets\n- Alerts\n".to_string(),
        })
        .unwrap();

    assert!(posts_dir.join("cost-optimizer-launch.md").is_file());

    let reread = repo.get_post("cost-optimizer-launch").unwrap();
    assert_eq!(reread.title, created.title);
    assert_eq!(reread.author, "Netrun Systems");
    assert_eq!(reread.date_string(), "2024-11-05");
    assert_eq!(reread.excerpt, "Cutting Azure spend");
    assert!(reread.content.contains("<h2>Highlights</h2>"));
    assert!(reread.content.contains("<li>Alerts</li>"));
}
