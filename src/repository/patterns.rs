// file: src/repository/patterns.rs
// description: known 42 curriculum project names and naming conventions
// reference: 42 school common core, piscine and specialization subjects

use lazy_static::lazy_static;

/// Project names and common spellings, matched by substring or prefix.
pub const PROJECT_PATTERNS: &[&str] = &[
    // libft
    "libft", "lib-ft", "lib_ft", "mylibft", "my-libft", "my_libft",
    // ft_printf
    "printf", "ft_printf", "ft-printf", "ftprintf", "my_printf", "my-printf",
    // get_next_line
    "get_next_line", "get-next-line", "getnextline", "gnl", "get_next_line_42",
    "ft_get_next_line", "ft-get-next-line",
    // born2beroot
    "born2beroot", "born-2-be-root", "born_2_be_root", "born-to-be-root",
    "born_to_be_root", "b2br", "born2root", "borntoberoot",
    // pipex
    "pipex", "pipe-x", "pipe_x", "ft_pipex", "ft-pipex",
    // so_long
    "so_long", "so-long", "solong", "so_long_game", "game-so-long",
    "ft_so_long", "ft-so-long",
    // fdf
    "fdf", "fil-de-fer", "fil_de_fer", "wireframe", "ft_fdf", "ft-fdf",
    "fdf_wireframe", "fdf-wireframe",
    // minitalk
    "minitalk", "mini-talk", "mini_talk", "ft_minitalk", "ft-minitalk",
    // push_swap
    "push_swap", "push-swap", "pushswap", "push_swap_algorithm",
    "sorting-algorithm", "ft_push_swap", "ft-push-swap",
    // minishell
    "minishell", "mini-shell", "mini_shell", "ft_minishell", "ft-minishell",
    "shell", "my-shell", "simple-shell", "bash-clone",
    // philosophers
    "philosophers", "philo", "philosopher", "dining-philosophers",
    "ft_philosophers", "ft-philosophers", "dining_philosophers",
    // netpractice
    "netpractice", "net-practice", "net_practice", "network-practice",
    "networking", "ft_netpractice",
    // cub3d
    "cub3d", "cub-3d", "cub_3d", "cube3d", "raycaster", "raycast",
    "ft_cub3d", "ft-cub3d", "3d-game", "cub3d-game",
    // cpp modules
    "cpp", "cpp-modules", "cpp_modules", "c++", "cplusplus",
    "cpp00", "cpp01", "cpp02", "cpp03", "cpp04", "cpp05", "cpp06", "cpp07", "cpp08", "cpp09",
    "cpp-00", "cpp-01", "cpp-02", "cpp-03", "cpp-04", "cpp-05", "cpp-06", "cpp-07", "cpp-08",
    "cpp-09",
    "cpp_00", "cpp_01", "cpp_02", "cpp_03", "cpp_04", "cpp_05", "cpp_06", "cpp_07", "cpp_08",
    "cpp_09",
    // inception
    "inception", "docker-inception", "ft_inception", "ft-inception",
    "docker-compose-project", "inception-docker",
    // ft_containers
    "ft_containers", "ft-containers", "containers", "stl-containers",
    "cpp-containers", "ft_stl", "ft-stl",
    // webserv
    "webserv", "web-serv", "web_serv", "webserver", "web-server",
    "http-server", "ft_webserv", "ft-webserv", "httpd",
    // ft_transcendence
    "ft_transcendence", "ft-transcendence", "transcendence", "pong-game",
    "web-pong", "final-project", "transcendence-game",
    // piscine
    "piscine", "piscine-c", "c-piscine", "swimming-pool", "ecole42-piscine",
    "rush00", "rush01", "rush02", "rush03", "rush04",
    "rush-00", "rush-01", "rush-02", "rush-03", "rush-04",
    "rush_00", "rush_01", "rush_02", "rush_03", "rush_04",
    "bsq", "biggest-square", "biggest_square",
    "shell00", "shell01", "shell-00", "shell-01", "shell_00", "shell_01",
    // piscine C modules
    "c00", "c01", "c02", "c03", "c04", "c05", "c06", "c07", "c08", "c09", "c10", "c11", "c12",
    "c13",
    "c-00", "c-01", "c-02", "c-03", "c-04", "c-05", "c-06", "c-07", "c-08", "c-09", "c-10",
    "c-11", "c-12", "c-13",
    "c_00", "c_01", "c_02", "c_03", "c_04", "c_05", "c_06", "c_07", "c_08", "c_09", "c_10",
    "c_11", "c_12", "c_13",
    // exams
    "exam", "exam-rank-02", "exam-rank-03", "exam-rank-04", "exam-rank-05", "exam-rank-06",
    "examrank02", "examrank03", "examrank04", "examrank05", "examrank06",
    "exam_rank_02", "exam_rank_03", "exam_rank_04", "exam_rank_05", "exam_rank_06",
    "exam-02", "exam-03", "exam-04", "exam-05", "exam-06",
    "exam_02", "exam_03", "exam_04", "exam_05", "exam_06",
    // data science
    "ft_linear_regression", "ft-linear-regression", "linear-regression", "linear_regression",
    "machine-learning", "ml-regression", "dslr", "data-science-logistic-regression",
    "logistic-regression", "logistic_regression", "multilayer_perceptron",
    "multilayer-perceptron", "neural-network", "perceptron", "mlp", "kmeans", "k-means",
    "clustering", "ft_kmeans", "ft-kmeans", "ready_set_boole", "ready-set-boole",
    "boolean-evaluation", "matrix", "ft_matrix", "ft-matrix", "linear-algebra", "computorv1",
    "computor-v1", "computor_v1", "polynomial-solver",
    // cybersecurity
    "darkly", "web-security", "cybersecurity", "rainfall", "reverse-engineering",
    "binary-exploitation", "override", "system-security", "privilege-escalation",
    "ft_malcom", "ft-malcom", "network-scanner", "port-scanner",
    "ft_onion", "ft-onion", "tor-service", "onion-service",
    "woody_woodpacker", "woody-woodpacker", "binary-packer", "elf-packer",
    "ft_ping", "ft-ping", "ping-implementation", "network-ping",
    "ft_traceroute", "ft-traceroute", "traceroute-implementation",
    "ft_nmap", "ft-nmap", "network-mapper", "matt_daemon", "matt-daemon",
    "daemon-process", "system-daemon", "taskmaster", "task-master", "process-manager",
    // system administration
    "ft_services", "ft-services", "kubernetes-services", "k8s-services",
    "cloud_1", "cloud-1", "cloud-infrastructure", "aws-cloud",
    // iOS
    "swifty_proteins", "swifty-proteins", "protein-viewer", "ios-proteins",
    "swifty_companion", "swifty-companion", "ios-companion", "42-api-ios",
    // graphics
    "scop", "opengl-viewer", "3d-viewer", "obj-viewer", "humangl", "human-gl",
    "opengl-human", "3d-human", "particle_system", "particle-system",
    "opengl-particles", "mod1", "raytracer", "ray-tracer", "miniRT", "minirt",
    "ray_tracer", "ray_tracing",
    // generic prefixes
    "ft_", "ft-", "ecole42-", "school42-", "42-", "42_",
];

/// Name endings used for school repositories.
pub const PROJECT_SUFFIXES: &[&str] = &["-42", "_42", "-ecole42", "-school42", "42"];

/// Any name containing this marker is treated as coursework.
pub const SCHOOL_MARKER: &str = "42";

lazy_static! {
    /// Lower-cased copy of [`PROJECT_PATTERNS`]; names are compared lower-cased.
    pub static ref NORMALIZED_PATTERNS: Vec<String> = PROJECT_PATTERNS
        .iter()
        .map(|p| p.to_lowercase())
        .collect();
}
