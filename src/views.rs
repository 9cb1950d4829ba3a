//! Rendering Engine: named Tera views bound to typed view-models.

use crate::models::{ContactEntry, Post, User};
use serde::Serialize;
use tera::{Context, Tera};

/// A view-model knows which template renders it.
pub trait View: Serialize {
    const NAME: &'static str;
}

/// Pool of templates parsed once at startup.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Parses every `*.html` file below `template_dir`.
    pub fn from_dir(template_dir: &str) -> Result<Self, tera::Error> {
        let tera = Tera::new(&format!("{}/**/*.html", template_dir.trim_end_matches('/')))?;
        log::info!("Loaded {} views from '{}'", tera.get_template_names().count(), template_dir);
        Ok(Self { tera })
    }

    pub fn from_tera(tera: Tera) -> Self {
        Self { tera }
    }

    /// Binds `view` into its template. A missing template or an undefined field is an error,
    /// never a partial body.
    pub fn render<V: View>(&self, view: &V) -> Result<String, tera::Error> {
        let ctx = Context::from_serialize(view)?;
        self.tera.render(V::NAME, &ctx)
    }
}

// --- View-models, one per template ---
// Field-less views use `{}` so they serialize as an empty map; Tera rejects a unit value.

#[derive(Serialize)]
pub struct LoginPage {}

impl View for LoginPage {
    const NAME: &'static str = "login.html";
}

#[derive(Serialize)]
pub struct RegisterPage {}

impl View for RegisterPage {
    const NAME: &'static str = "register.html";
}

#[derive(Serialize)]
pub struct UserLanding {}

impl View for UserLanding {
    const NAME: &'static str = "landing.html";
}

#[derive(Serialize)]
pub struct AdminDashboard {}

impl View for AdminDashboard {
    const NAME: &'static str = "dashboard.html";
}

#[derive(Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

impl View for PostList {
    const NAME: &'static str = "posts.html";
}

#[derive(Serialize)]
pub struct AdminPostList {
    pub posts: Vec<Post>,
}

impl View for AdminPostList {
    const NAME: &'static str = "postsadm.html";
}

#[derive(Serialize)]
pub struct CreatePostForm {}

impl View for CreatePostForm {
    const NAME: &'static str = "create_post.html";
}

#[derive(Serialize)]
pub struct EditPostForm {
    pub post: Post,
}

impl View for EditPostForm {
    const NAME: &'static str = "edit_post.html";
}

#[derive(Serialize)]
pub struct Gallery {
    pub image_urls: Vec<String>,
}

impl View for Gallery {
    const NAME: &'static str = "gallery.html";
}

#[derive(Serialize)]
pub struct AdminGallery {
    pub image_urls: Vec<String>,
}

impl View for AdminGallery {
    const NAME: &'static str = "galeryadm.html";
}

#[derive(Serialize)]
pub struct UploadImageForm {}

impl View for UploadImageForm {
    const NAME: &'static str = "upload-image.html";
}

/// Shown right after an upload succeeds.
#[derive(Serialize)]
pub struct UploadResult {
    pub image_urls: Vec<String>,
}

impl View for UploadResult {
    const NAME: &'static str = "index.html";
}

#[derive(Serialize)]
pub struct ContactForm {}

impl View for ContactForm {
    const NAME: &'static str = "contact.html";
}

#[derive(Serialize)]
pub struct ContactList {
    pub entries: Vec<ContactEntry>,
}

impl View for ContactList {
    const NAME: &'static str = "contact_list.html";
}

#[derive(Serialize)]
pub struct Profile {
    pub user: User,
}

impl View for Profile {
    const NAME: &'static str = "profile.html";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
    }

    impl View for Greeting {
        const NAME: &'static str = "greeting.html";
    }

    #[derive(Serialize)]
    struct Orphan {}

    impl View for Orphan {
        const NAME: &'static str = "nowhere.html";
    }

    fn renderer(template: &str) -> Renderer {
        let mut tera = Tera::default();
        tera.add_raw_template("greeting.html", template).unwrap();
        Renderer::from_tera(tera)
    }

    #[test]
    fn binds_view_model_fields() {
        let views = renderer("<p>Hello {{ name }}</p>");
        let html = views.render(&Greeting { name: "Jane".to_string() }).unwrap();
        assert_eq!(html, "<p>Hello Jane</p>");
    }

    #[test]
    fn escapes_html_in_bound_values() {
        let views = renderer("{{ name }}");
        let html = views.render(&Greeting { name: "<b>".to_string() }).unwrap();
        assert_eq!(html, "&lt;b&gt;");
    }

    #[test]
    fn undefined_field_is_an_error() {
        let views = renderer("{{ missing }}");
        assert!(views.render(&Greeting { name: "Jane".to_string() }).is_err());
    }

    #[test]
    fn missing_view_is_an_error() {
        let views = renderer("{{ name }}");
        assert!(views.render(&Orphan {}).is_err());
    }

    #[test]
    fn shipped_templates_render_their_view_models() {
        let views = Renderer::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")).unwrap();
        let post = Post { id: 7, title: "Hello".to_string(), content: "World".to_string() };

        assert!(views.render(&LoginPage {}).unwrap().contains("name=\"username\""));
        assert!(views.render(&RegisterPage {}).is_ok());
        assert!(views.render(&UserLanding {}).is_ok());
        assert!(views.render(&AdminDashboard {}).is_ok());
        assert!(views.render(&PostList { posts: vec![post.clone()] }).unwrap().contains("Hello"));
        assert!(views.render(&AdminPostList { posts: vec![post.clone()] }).unwrap().contains("/post/edit?id=7"));
        assert!(views.render(&CreatePostForm {}).is_ok());
        assert!(views.render(&EditPostForm { post }).unwrap().contains("value=\"7\""));
        assert!(views.render(&Gallery { image_urls: vec!["uploads/a.png".to_string()] }).unwrap().contains("a.png"));
        assert!(views.render(&AdminGallery { image_urls: vec![] }).is_ok());
        assert!(views.render(&UploadImageForm {}).is_ok());
        assert!(views.render(&UploadResult { image_urls: vec![] }).is_ok());
        assert!(views.render(&ContactForm {}).is_ok());
        assert!(views.render(&ContactList { entries: vec![] }).is_ok());
        assert!(views.render(&Profile { user: crate::routes::pages::placeholder_profile() }).unwrap().contains("johndoe"));
    }
}
