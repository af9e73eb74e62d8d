fn main() {

    // 1. Parse commandline arguments
    let cli = simple_vector::args::parse_cli_args();
    if let Err(err) = simple_vector::args::validate(&cli) {
        println!("CLI ERROR!");
        println!("{}", err);
        std::process::exit(1);
    }

    // 2. Run the command and print its result
    match simple_vector::run_command(cli.command) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            println!("CLI ERROR!");
            match err {
                simple_vector::VecError::IoError(err) => {
                    println!("IO Error: {}", err);
                },
                err => {
                    println!("{}", err);
                },
            }
            std::process::exit(1);
        },
    }
}
