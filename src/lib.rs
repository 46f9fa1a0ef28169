pub mod modules {
    pub mod localtime {
        pub mod core {
            pub mod current_time;
        }
        pub mod use_cases {
            pub mod get_local_time {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
