use serde::Deserialize;

#[derive(Deserialize)]
pub struct LandingQuery {
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct MemberForm {
    pub name: String,
    pub role: String,
    pub category: String,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Deserialize)]
pub struct MemberEditForm {
    pub name: Option<String>,
    pub role: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Deserialize)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub layout: Option<String>,
}

#[derive(Deserialize)]
pub struct EventEditForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub layout: Option<String>,
}

#[derive(Deserialize)]
pub struct BlogForm {
    pub title: String,
    pub category: Option<String>,
    pub author_name: Option<String>,
    pub image: Option<String>,
    pub snippet: Option<String>,
    pub body: Option<String>,
}

#[derive(Deserialize)]
pub struct BlogEditForm {
    pub title: Option<String>,
    pub category: Option<String>,
    pub author_name: Option<String>,
    pub image: Option<String>,
    pub snippet: Option<String>,
    pub body: Option<String>,
}

#[derive(Deserialize)]
pub struct CommunityBlogForm {
    pub title: String,
    pub category: String,
    pub author_name: String,
    pub author_email: String,
    pub snippet: Option<String>,
    pub body: String,
}

#[derive(Deserialize)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}
