// src/main.rs
mod activity_card;
mod activity_list;
mod api;
mod app;
mod config;
mod error;
mod models;
mod notice;
mod removals;
mod signup_form;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
