//! メインアプリケーションコンポーネント

use exercise_video_common::ComparisonMode;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::{path, NavigateOptions};

use crate::components::{
    comparison_page::{CompareLayout, ComparisonPage},
    navigation_bar::NavigationBar,
    upload_page::UploadPage,
};

/// ルーティング
///
/// 比較の2ルートは `CompareLayout` の下にまとめ、ルート間で比較状態を共有する。
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <NavigationBar />
                <main class="container">
                    <Routes fallback=|| view! {
                        <Redirect
                            path="/"
                            options=NavigateOptions { replace: true, ..Default::default() }
                        />
                    }>
                        <Route path=path!("/") view=UploadPage />
                        <ParentRoute path=path!("/compare") view=CompareLayout>
                            <Route
                                path=path!("/pretrained")
                                view=|| view! { <ComparisonPage mode=ComparisonMode::Pretrained /> }
                            />
                            <Route
                                path=path!("/reference")
                                view=|| view! { <ComparisonPage mode=ComparisonMode::Reference /> }
                            />
                        </ParentRoute>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
